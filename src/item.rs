// src/item.rs
//
// Fields shared by every remix, independent of the kind of value it holds.

/// Opaque presentation hint passed through to whoever renders the remix.
pub type LayoutId = u32;

/// Identity of a remix as seen by a registry or UI layer.
pub trait RemixItem {
    /// Human-readable label.
    fn name(&self) -> &str;

    /// Stable identifier.
    fn key(&self) -> &str;

    fn layout_id(&self) -> LayoutId;
}
