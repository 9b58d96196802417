use egui::{Context, Frame, Label, Window};

/// Values shown on the HUD.
#[derive(Debug, Clone, PartialEq)]
pub struct HudState {
    pub hp: i32,
    pub ap: i32,
    pub in_turn: bool,
    pub log: String,
    /// Last frame duration, shown when known.
    pub frame_time_ms: Option<f32>,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            hp: 10,
            ap: 2,
            in_turn: false,
            log: String::new(),
            frame_time_ms: None,
        }
    }
}

impl HudState {
    /// Initial HUD for a freshly started session on `map_name`.
    pub fn starter(map_name: &str) -> Self {
        Self {
            log: format!("Starter running\nMap: {map_name}"),
            ..Self::default()
        }
    }

    pub fn stats_line(&self) -> String {
        format!("HP: {}  AP: {}", self.hp, self.ap)
    }

    pub fn turn_mode_line(&self) -> &'static str {
        if self.in_turn {
            "Turn mode: YES"
        } else {
            "Turn mode: NO"
        }
    }

    pub fn frame_time_line(&self) -> Option<String> {
        self.frame_time_ms
            .map(|ms| format!("Frame: {ms:.2} ms ({:.0} fps)", 1000.0 / ms.max(0.001)))
    }
}

const HUD_BG_ALPHA: f32 = 0.35;

/// Draw the HUD window. Call once per frame inside `Context::run`.
pub fn draw_hud(ctx: &Context, state: &HudState) {
    let style = ctx.style();
    let frame =
        Frame::window(&style).fill(style.visuals.window_fill.gamma_multiply(HUD_BG_ALPHA));

    Window::new("HUD")
        .default_pos([10.0, 10.0])
        .title_bar(false)
        .resizable(false)
        .auto_sized()
        .frame(frame)
        .show(ctx, |ui| {
            ui.label(state.stats_line());
            ui.separator();
            ui.label(state.turn_mode_line());
            ui.separator();
            ui.add(Label::new(state.log.as_str()).wrap());
            if let Some(line) = state.frame_time_line() {
                ui.separator();
                ui.small(line);
            }
        });
}
