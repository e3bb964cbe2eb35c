//! Resize drags and click-versus-drag detection

use crate::actions::Action;
use crate::messages::{HitTarget, PointerMsg};
use crate::model::ShellModel;
use crate::resizer::Point;

/// Background elements whose clicks close an open settings page
const BACKGROUND_CLASSES: [&str; 3] = ["mx_MatrixChat", "mx_MatrixChat_middlePanel", "mx_RoomView"];

/// A mouse-up closer than this to its mouse-down is a click
pub const CLICK_RADIUS: f32 = 5.0;

pub fn update_pointer(model: &mut ShellModel, msg: PointerMsg) {
    match msg {
        PointerMsg::Down {
            position,
            target: HitTarget::ResizeHandle(index),
        } => {
            if let Some(resizer) = model.resizer.as_mut() {
                resizer.handle_pointer_down(index, position);
            }
        }
        PointerMsg::Down {
            position,
            target: HitTarget::Element { class_names },
        } => on_mouse_down(model, position, &class_names),
        PointerMsg::Move { position } => {
            if let Some(resizer) = model.resizer.as_mut() {
                resizer.handle_pointer_move(position);
            }
        }
        PointerMsg::Up { position } => {
            if let Some(resizer) = model.resizer.as_mut() {
                resizer.handle_pointer_up(position);
            }
            on_mouse_up(model, position);
        }
    }
}

fn on_mouse_down(model: &mut ShellModel, position: Point, class_names: &str) {
    // Disabled panels let clicks through to the background
    if !(model.props.left_disabled && model.props.right_disabled) {
        return;
    }
    let on_background = class_names
        .split(' ')
        .any(|class| BACKGROUND_CLASSES.contains(&class));
    if on_background {
        model.state.mouse_down = Some(position);
    }
}

fn on_mouse_up(model: &mut ShellModel, position: Point) {
    let Some(down) = model.state.mouse_down.take() else {
        return;
    };
    let distance = down.distance_to(position);
    if distance < CLICK_RADIUS {
        model.dispatcher.dispatch(Action::CloseSettings);
    } else {
        tracing::trace!(distance, "background drag, not a click");
    }
}
