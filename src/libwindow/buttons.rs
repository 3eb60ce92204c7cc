use raylib::prelude::*;
use rpsls::Choice;

pub struct Button {
    pub rect: Rectangle,
    pub tag: &'static str,
}

/// Clickable areas, tagged with the action they stand for.
pub struct ButtonStore {
    pub buttons: Vec<Button>,
}

fn button_rec(i: usize) -> Rectangle {
    Rectangle {
        x: 20.0 + 122.0 * i as f32,
        y: 280.0,
        width: 110.0,
        height: 70.0,
    }
}

impl ButtonStore {
    pub fn new() -> Self {
        let mut b: Vec<Button> = Choice::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| Button {
                rect: button_rec(i),
                tag: c.name(),
            })
            .collect();

        b.push(Button {
            rect: Rectangle {
                x: 265.0,
                y: 390.0,
                width: 110.0,
                height: 40.0,
            },
            tag: "Reset",
        });

        ButtonStore { buttons: b }
    }

    pub fn hit(&self, point: Vector2) -> Option<&'static str> {
        self.buttons
            .iter()
            .find(|b| b.rect.check_collision_point_rec(point))
            .map(|b| b.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpsls::Action;

    #[test]
    fn test_every_tag_parses() {
        let store = ButtonStore::new();
        assert_eq!(store.buttons.len(), 6);
        for b in &store.buttons {
            assert!(b.tag.parse::<Action>().is_ok(), "{}", b.tag);
        }
    }

    #[test]
    fn test_hit() {
        let store = ButtonStore::new();
        assert_eq!(store.hit(Vector2 { x: 30.0, y: 300.0 }), Some("Rock"));
        assert_eq!(store.hit(Vector2 { x: 520.0, y: 300.0 }), Some("Lizard"));
        assert_eq!(store.hit(Vector2 { x: 300.0, y: 400.0 }), Some("Reset"));
        assert_eq!(store.hit(Vector2 { x: 5.0, y: 5.0 }), None);
    }

    #[test]
    fn test_buttons_fit_the_window() {
        for b in &ButtonStore::new().buttons {
            assert!(b.rect.x >= 0.0 && b.rect.x + b.rect.width <= 640.0);
            assert!(b.rect.y >= 0.0 && b.rect.y + b.rect.height <= 480.0);
        }
    }
}
