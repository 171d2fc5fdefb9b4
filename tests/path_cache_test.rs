// ==========================================
// 组件路径缓存集成测试
// ==========================================
// 测试目标: 首次解析遍历模型树,后续命中缓存
// ==========================================

mod helpers;

use cabinet_export::engine::PathCache;
use cabinet_export::model::ModelTree;
use helpers::stub_model::StubModel;

#[test]
fn test_second_resolution_does_not_traverse_tree() {
    let mut model = StubModel::new();
    let expected = model.add_path("A/B/C");
    let mut cache = PathCache::new();

    let first = cache.resolve(&model, "A/B/C");
    // 三段路径各枚举一次子节点
    assert_eq!(model.child_lookups(), 3);

    let second = cache.resolve(&model, "A/B/C");
    assert_eq!(first, Some(expected));
    assert_eq!(second, first);
    assert_eq!(model.child_lookups(), 3);
    assert_eq!(cache.traversal_count(), 1);
}

#[test]
fn test_duplicate_siblings_resolve_to_first_match() {
    let mut model = StubModel::new();
    let parent = model.add_path("Corpus:1");
    let first = model.add_child(parent, "Shelf:1");
    let duplicate = model.add_child(parent, "Shelf:1");
    assert_ne!(first, duplicate);

    let mut cache = PathCache::new();
    assert_eq!(cache.resolve(&model, "Corpus:1/Shelf:1"), Some(first));
}

#[test]
fn test_missing_path_is_retried_on_next_lookup() {
    let mut model = StubModel::new();
    model.add_path("A/B");
    let mut cache = PathCache::new();

    assert_eq!(cache.resolve(&model, "A/X"), None);
    assert_eq!(cache.resolve(&model, "A/X"), None);
    // 未找到的路径不缓存,两次都会遍历
    assert_eq!(cache.traversal_count(), 2);
    assert!(cache.is_empty());
}

#[test]
fn test_clear_forces_fresh_traversal() {
    let mut model = StubModel::new();
    model.add_path("A/B");
    let mut cache = PathCache::new();

    cache.resolve(&model, "A/B");
    let lookups = model.child_lookups();
    cache.clear();
    assert!(cache.is_empty());

    let handle = cache.resolve(&model, "A/B");
    assert!(handle.is_some());
    assert!(model.child_lookups() > lookups);
    assert_ne!(handle, Some(model.root()));
}
