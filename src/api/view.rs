use super::RulerLayout;

/// DOM-side collaborator of the minimap widget.
///
/// Implementations own element construction and class/style plumbing; the
/// controller only decides what to write and when.
pub trait MinimapView {
    /// Writes the three ruler region widths.
    fn apply_ruler(&mut self, layout: RulerLayout);

    /// Structural visibility flag, applied synchronously by `toggle`.
    fn set_hidden(&mut self, hidden: bool);

    /// Transparency flag, applied one frame after `set_hidden` so the
    /// transition starts from a laid-out element.
    fn set_transparent(&mut self, transparent: bool);
}

/// View that only records the last written state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadlessView {
    pub ruler: Option<RulerLayout>,
    pub ruler_writes: usize,
    pub hidden: bool,
    pub transparent: bool,
}

impl MinimapView for HeadlessView {
    fn apply_ruler(&mut self, layout: RulerLayout) {
        self.ruler = Some(layout);
        self.ruler_writes += 1;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }
}
