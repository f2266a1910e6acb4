use eframe::egui;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use crate::engine::{GridEvent, RefreshPipeline};
use crate::gui::frame::GridFrame;
use crate::gui::grid::draw_grid;
use crate::models::{GridLayout, GridSettings};
use crate::parsing::parse_combat_log_line;
use crate::provider::SimulatedRaid;

pub struct SquaresApp {
    /// Decides slot contents and visuals
    pub pipeline: RefreshPipeline,
    /// Game state the pipeline reads from
    pub raid: SimulatedRaid,
    /// Latest descriptors for painting
    pub frame: GridFrame,
    pub layout: GridLayout,
    rng: StdRng,
    /// Last seen Shift state, to emit changes only
    shift_held: bool,
    entered_world: bool,
}

impl SquaresApp {
    pub fn new(settings: &GridSettings, raid: SimulatedRaid) -> Self {
        Self {
            pipeline: RefreshPipeline::new(settings),
            raid,
            frame: GridFrame::new(settings.slot_count, settings.min_scale),
            layout: settings.layout(),
            rng: StdRng::from_entropy(),
            shift_held: false,
            entered_world: false,
        }
    }

    fn dispatch(&mut self, event: GridEvent) {
        self.pipeline.dispatch(event, &self.raid, &mut self.frame);
    }

    /// Feeds one frame's worth of host activity into the pipeline, in order.
    fn pump(&mut self, elapsed: f64, shift: bool) {
        if !self.entered_world {
            info!("Entering world with {} group members", self.raid.members().len());
            self.entered_world = true;
            self.dispatch(GridEvent::EnteredWorld);
        }

        let step = self.raid.advance(elapsed, &mut self.rng);
        for line in &step.combat_log {
            if let Some(entry) = parse_combat_log_line(line) {
                self.dispatch(GridEvent::CombatLog(entry));
            }
        }
        for event in step.events {
            self.dispatch(event);
        }

        if shift != self.shift_held {
            self.shift_held = shift;
            self.dispatch(GridEvent::ModifierStateChanged { pressed: shift });
        }

        self.dispatch(GridEvent::Tick { elapsed });
    }
}

impl eframe::App for SquaresApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (elapsed, shift) = ctx.input(|i| (i.stable_dt as f64, i.modifiers.shift));
        self.pump(elapsed, shift);

        // Keep ticking even when the window is not focused
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = draw_grid(ui, &self.frame, &self.layout);
            if self.frame.drag_enabled() && response.drag_started() {
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }
        });
    }
}
