// ==========================================
// 集成测试辅助模块
// ==========================================

#![allow(dead_code)]

pub mod stub_model;
pub mod table_builder;
