//! Shell composition
//!
//! Turns the model into a description of what the host should render.

use crate::model::{body_classes, PageView, ShellModel, TopBanner};

#[derive(Debug, Clone, PartialEq)]
pub struct LeftPanelView {
    /// Collapsed by the host (e.g. on narrow windows)
    pub collapsed: bool,
    /// Collapsed by a resize drag
    pub resizer_collapsed: bool,
    pub disabled: bool,
    pub size: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub top_banner: Option<TopBanner>,
    pub body_classes: Vec<&'static str>,
    pub left_panel: LeftPanelView,
    /// None when the host renders the page itself
    pub page: Option<PageView>,
    pub aria_hidden: bool,
}

pub fn view(model: &ShellModel) -> ShellView {
    let top_banner = model.top_banner();
    let body_classes = body_classes(top_banner.is_some(), model.state.use_compact_layout);
    ShellView {
        top_banner,
        body_classes,
        left_panel: LeftPanelView {
            collapsed: model.props.collapse_lhs,
            resizer_collapsed: model.left_panel_collapsed(),
            disabled: model.props.left_disabled,
            size: model.left_panel_size(),
        },
        page: model.page(),
        aria_hidden: model.props.hide_to_sr_users,
    }
}
