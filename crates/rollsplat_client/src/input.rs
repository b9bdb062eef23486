//! Захват указателя (мышь / touch) → PointerState симуляции
//!
//! Симуляция ждёт пиксели с осью Y вверх, окно отдаёт Y вниз — переворачиваем здесь.

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rollsplat_simulation::PointerState;

pub struct PointerCapturePlugin;

impl Plugin for PointerCapturePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, capture_pointer.after(InputSystem));
    }
}

fn capture_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let held_position = if mouse_buttons.pressed(MouseButton::Left) {
        window.cursor_position()
    } else {
        touches.first_pressed_position()
    };

    match held_position {
        Some(position) => {
            pointer.press(Vec2::new(position.x, window.height() - position.y));
        }
        // Курсор ушёл из окна с зажатой кнопкой = тоже отпускание
        None => pointer.release(),
    }
}
