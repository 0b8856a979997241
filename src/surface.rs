use crate::{Frame, prelude::*};

/// Icons the widget asks the host to draw, named by the host's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Icon {
    #[display(fmt = "chevron-left-solid")]
    ChevronLeft,
    #[display(fmt = "chevron-right-solid")]
    ChevronRight,
}

impl Icon {
    /// Lookup key for the host's icon set.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ChevronLeft => "chevron-left-solid",
            Self::ChevronRight => "chevron-right-solid",
        }
    }
}

/// Host-side painter.
///
/// The widget hands over a complete [`Frame`] after every render; how cells,
/// icons and class names become pixels is entirely up to the implementation.
pub trait Surface {
    fn paint(&mut self, frame: &Frame);
}
