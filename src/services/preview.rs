use crate::domain::models::{DesignState, JerseyPreview, PreviewPanel};

/// Projects the design selection onto the two display panels. Pure attribute
/// mapping: panel fill from the side color, wash from the shared accent.
pub fn render_preview(design: &DesignState) -> JerseyPreview {
    JerseyPreview {
        front: PreviewPanel {
            label: "front".to_string(),
            fill: design.front,
            accent_wash: design.accent,
        },
        back: PreviewPanel {
            label: "back".to_string(),
            fill: design.back,
            accent_wash: design.accent,
        },
    }
}
