use std::time::Duration;

use leptos::prelude::*;

const PIECES: usize = 120;
const LIFETIME: Duration = Duration::from_millis(3500);
const COLORS: [&str; 5] = ["#1976d2", "#ffb300", "#43a047", "#e53935", "#8e24aa"];

#[derive(Clone, Debug, PartialEq)]
struct Piece {
    left: f64,
    delay_ms: u32,
    drift: f64,
    color: &'static str,
}

impl Piece {
    fn random() -> Self {
        let r = js_sys::Math::random;
        Self {
            left: r() * 100.0,
            delay_ms: (r() * 600.0) as u32,
            drift: (r() - 0.5) * 40.0,
            color: COLORS[(r() * COLORS.len() as f64) as usize % COLORS.len()],
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.1}%; background: {}; animation-delay: {}ms; --drift: {:.1}vw;",
            self.left, self.color, self.delay_ms, self.drift
        )
    }
}

/// Handle for firing a confetti burst from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Celebration {
    pieces: RwSignal<Vec<Piece>>,
    burst: StoredValue<u64>,
}

impl Celebration {
    pub fn fire(self) {
        let Some(burst) = self.burst.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        self.pieces
            .set((0..PIECES).map(|_| Piece::random()).collect());
        set_timeout(
            move || {
                // A newer burst owns the pieces now.
                if self.burst.try_get_value() == Some(burst) {
                    self.pieces.try_set(Vec::new());
                }
            },
            LIFETIME,
        );
    }
}

pub fn provide_celebration() -> Celebration {
    let celebration = Celebration {
        pieces: RwSignal::new(Vec::new()),
        burst: StoredValue::new(0),
    };
    provide_context(celebration);
    celebration
}

#[component]
pub fn Confetti() -> impl IntoView {
    let celebration = expect_context::<Celebration>();

    view! {
        <div class="confetti" aria-hidden="true">
            {move || {
                celebration
                    .pieces
                    .get()
                    .iter()
                    .map(|piece| view! { <span class="confetti-piece" style=piece.style()></span> })
                    .collect_view()
            }}
        </div>
    }
}
