//! 组件生命周期管理

/// 依赖注入完成后的初始化回调
///
/// 每个组件都需要实现该 trait。绑定器在全部依赖字段赋值完成后调用一次
/// [`Initializer::after_property_set`]，早于组件对外可见；不需要回调的组件
/// 保留默认的空实现即可：
///
/// ```rust
/// use infrastructure_common::Initializer;
///
/// struct Plain;
///
/// impl Initializer for Plain {}
/// ```
pub trait Initializer {
    /// 依赖属性设置完成
    fn after_property_set(&mut self) {}
}
