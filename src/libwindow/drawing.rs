use crate::libwindow::buttons::ButtonStore;
use raylib::prelude::*;
use rpsls::Board;

pub fn draw_buttons(draw_handle: &mut RaylibDrawHandle, bs: &ButtonStore, mouse: Vector2) {
    for b in &bs.buttons {
        let hoover = b.rect.check_collision_point_rec(mouse);
        draw_handle.draw_rectangle_rec(
            b.rect,
            if hoover { Color::GRAY } else { Color::LIGHTGRAY },
        );
        draw_handle.draw_rectangle_lines_ex(b.rect, 2, Color::BLACK);
        draw_handle.draw_text(
            b.tag,
            b.rect.x as i32 + 10,
            b.rect.y as i32 + b.rect.height as i32 / 2 - 10,
            20,
            Color::BLACK,
        );
    }
}

pub fn draw_board(draw_handle: &mut RaylibDrawHandle, board: &Board) {
    draw_handle.draw_text(&board.caption, 20, 60, 28, Color::BLACK);
    draw_handle.draw_text(&board.detail, 20, 130, 24, Color::DARKGRAY);

    draw_handle.draw_text(
        &*format!("You: {}", board.player_score),
        20,
        200,
        20,
        Color::BLACK,
    );
    draw_handle.draw_text(
        &*format!("Bot: {}", board.opponent_score),
        200,
        200,
        20,
        Color::BLACK,
    );
    draw_handle.draw_text(
        &*format!("First to {}", board.target),
        480,
        10,
        10,
        Color::BLACK,
    );
    draw_handle.draw_text(
        "Keys 1-5 pick a shape, R resets.",
        10,
        10,
        10,
        Color::BLACK,
    );
}
