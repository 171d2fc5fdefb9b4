// ==========================================
// 柜体配置批量导出系统 - 组件路径目录
// ==========================================
// 参数化家具模型中受控节点的完整路径（以 / 分隔,自模型根起算）
// 每个特征维度拥有一组互不相交的路径
// ==========================================

// ===== 入口类型 =====
pub const CABINET: &str = "Corpus:1";
pub const PARTS: &str = "Parts:1";
pub const ROUND_PART: &str = "Parts:1/Round Part:1";
pub const HALF_ROUND_PART: &str = "Parts:1/Half Round Part:1";
pub const SQUARE_PART: &str = "Parts:1/Square Part:1";

pub const ENTRY_PATHS: &[&str] = &[CABINET, PARTS, ROUND_PART, HALF_ROUND_PART, SQUARE_PART];

// ===== 前板 =====
pub const SINGLE_DOOR: &str = "Corpus:1/Outside:1/Front:1/Single Door:1";
pub const DOUBLE_DOOR: &str = "Corpus:1/Outside:1/Front:1/Double Door:1";
pub const FIXED_FRONT: &str = "Corpus:1/Outside:1/Front:1/Fixed Front:1";
pub const DOOR_DRAWER: &str = "Corpus:1/Outside:1/Front:1/Door Drawer:1";
pub const DOUBLE_DOOR_DOUBLE_DRAWER: &str =
    "Corpus:1/Outside:1/Front:1/Double Door Double Drawer:1";
pub const DOOR_FIXED_FRONT: &str = "Corpus:1/Outside:1/Front:1/Door Fixed Front:1";
pub const DOUBLE_DOOR_FIXED_FRONT: &str = "Corpus:1/Outside:1/Front:1/Double Door Fixed Front:1";
pub const DRAWERS: &str = "Corpus:1/Outside:1/Front:1/Drawers:1";

// ===== 五金 =====
pub const HANDLE: &str = "Corpus:1/Outside:1/Hardware:1/Handle:1";
pub const HINGES: &str = "Corpus:1/Outside:1/Hardware:1/Hinges:1";
pub const HANDLE_MIRRORED: &str = "Corpus:1/Outside:1/Hardware:1/Handle Mirrored:1";
pub const HINGES_MIRRORED: &str = "Corpus:1/Outside:1/Hardware:1/Hinges Mirrored:1";
pub const DRAWER_HANDLE: &str = "Corpus:1/Outside:1/Hardware:1/Drawer Handle:1";

/// 前板维度受控的全部路径（前板变体 + 五金）
pub const FRONT_PATHS: &[&str] = &[
    SINGLE_DOOR,
    DOUBLE_DOOR,
    FIXED_FRONT,
    DOOR_DRAWER,
    DOUBLE_DOOR_DOUBLE_DRAWER,
    DOOR_FIXED_FRONT,
    DOUBLE_DOOR_FIXED_FRONT,
    DRAWERS,
    HANDLE,
    HINGES,
    HANDLE_MIRRORED,
    HINGES_MIRRORED,
    DRAWER_HANDLE,
];

// ===== 踢脚 =====
pub const PLINTH_BOTTOM: &str = "Corpus:1/Outside:1/Plinth:1/Plinth Bottom:1";
pub const PLINTH_LEFT: &str = "Corpus:1/Outside:1/Plinth:1/Plinth Left:1";
pub const PLINTH_RIGHT: &str = "Corpus:1/Outside:1/Plinth:1/Plinth Right:1";

pub const PLINTH_PATHS: &[&str] = &[PLINTH_BOTTOM, PLINTH_LEFT, PLINTH_RIGHT];

// ===== 侧板 =====
pub const SIDE_PANEL_LEFT: &str = "Corpus:1/Outside:1/Side Panel Left:1";
pub const SIDE_PANEL_RIGHT: &str = "Corpus:1/Outside:1/Side Panel Right:1";

pub const PANEL_PATHS: &[&str] = &[SIDE_PANEL_LEFT, SIDE_PANEL_RIGHT];

// ===== 单开关特征 =====
pub const SHELVES: &str = "Corpus:1/Inside:1/Shelves:1";
pub const DIVIDERS: &str = "Corpus:1/Inside:1/Dividers:1";
pub const CLOTHING_RODS: &str = "Corpus:1/Inside:1/Clothing Rods:1";
pub const FEET: &str = "Corpus:1/Outside:1/Feet:1";

// ===== 质量统计 =====
pub const INSIDE: &str = "Corpus:1/Inside:1";
pub const OUTSIDE: &str = "Corpus:1/Outside:1";

// ===== 用户参数名 =====
pub mod parameters {
    pub const HEIGHT: &str = "Height";
    pub const WIDTH: &str = "Width";
    pub const DEPTH: &str = "Depth";
    pub const THICKNESS_CORPUS: &str = "Thickness_Corpus";
    pub const THICKNESS_FRONT: &str = "Thickness_Front";
    pub const THICKNESS_BACK: &str = "Thickness_Back";
    pub const SHELF_AMOUNT: &str = "Shelf_Amount";
    pub const DIVIDER_AMOUNT: &str = "Divider_Amount";
    pub const QUANTITY: &str = "Quantity";
    pub const THICKNESS_SIDE_PANEL_LEFT: &str = "Thickness_Side_Panel_Left";
    pub const THICKNESS_SIDE_PANEL_RIGHT: &str = "Thickness_Side_Panel_Right";
    pub const THICKNESS_PLINTH_BOTTOM: &str = "Thickness_Plinth_Bottom";
    pub const THICKNESS_PLINTH_LEFT: &str = "Thickness_Plinth_Left";
    pub const THICKNESS_PLINTH_RIGHT: &str = "Thickness_Plinth_Right";
    pub const CLOTHING_ROD_AMOUNT: &str = "Clothing_Rod_Amount";
    pub const DRAWER_AMOUNT: &str = "Drawer_Amount";

    pub const ALL: &[&str] = &[
        HEIGHT,
        WIDTH,
        DEPTH,
        THICKNESS_CORPUS,
        THICKNESS_FRONT,
        THICKNESS_BACK,
        SHELF_AMOUNT,
        DIVIDER_AMOUNT,
        QUANTITY,
        THICKNESS_SIDE_PANEL_LEFT,
        THICKNESS_SIDE_PANEL_RIGHT,
        THICKNESS_PLINTH_BOTTOM,
        THICKNESS_PLINTH_LEFT,
        THICKNESS_PLINTH_RIGHT,
        CLOTHING_ROD_AMOUNT,
        DRAWER_AMOUNT,
    ];
}

// ===== 外观名称（默认） =====
pub const FRONT_APPEARANCE: &str = "Front Paint";
pub const CORPUS_APPEARANCE: &str = "Corpus Paint";
pub const PLINTH_APPEARANCE: &str = "Plinth Paint";

/// 全部受控路径（用于构建参考模型）
pub fn controlled_paths() -> Vec<&'static str> {
    let mut paths = Vec::new();
    paths.extend_from_slice(ENTRY_PATHS);
    paths.extend_from_slice(FRONT_PATHS);
    paths.extend_from_slice(PLINTH_PATHS);
    paths.extend_from_slice(PANEL_PATHS);
    paths.extend_from_slice(&[SHELVES, DIVIDERS, CLOTHING_RODS, FEET]);
    paths
}
