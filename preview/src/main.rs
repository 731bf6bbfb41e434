//! Desktop preview app for trilight-composer animations
//!
//! Renders the three strands of the triangle display in a window. All state
//! changes go through the command channel, the same way firmware would steer
//! the director.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use trilight_composer::{
    AnimationId, CommandChannel, CommandSender, Director, DirectorCommand, Duration,
    EngineConfig, EngineError, FrameScheduler, Instant, PhysicalStrand, RotationPolicy, Rgb,
    Strand,
};

/// Size of each LED circle in pixels
const LED_SIZE: f32 = 10.0;

/// Command channel size
const COMMAND_CHANNEL_SIZE: usize = 16;

/// Default rotation budget shown in the UI
const DEFAULT_ROTATION_FRAMES: u32 = 600;

/// Static command channel between UI and director
static COMMANDS: CommandChannel<COMMAND_CHANNEL_SIZE> =
    CommandChannel::<COMMAND_CHANNEL_SIZE>::new();

/// Simulated strand: staged pixels become visible on flush
struct PreviewStrand {
    staged: Vec<Rgb>,
    shown: Vec<Rgb>,
}

impl PreviewStrand {
    fn new(len: usize) -> Self {
        Self {
            staged: vec![Rgb::default(); len],
            shown: vec![Rgb::default(); len],
        }
    }

    fn pixels(&self) -> &[Rgb] {
        &self.shown
    }
}

impl PhysicalStrand for PreviewStrand {
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        self.shown.copy_from_slice(&self.staged);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RotationMode {
    Frames,
    Completion,
    Either,
}

impl RotationMode {
    const fn policy(self, frames: u32) -> RotationPolicy {
        match self {
            Self::Frames => RotationPolicy::fixed_frames(frames),
            Self::Completion => RotationPolicy::on_completion(),
            Self::Either => RotationPolicy::either(frames),
        }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Trilight Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "trilight-preview",
        options,
        Box::new(|_cc| match PreviewApp::new() {
            Ok(app) => Ok(Box::new(app) as Box<dyn eframe::App>),
            Err(error) => Err(error.to_string().into()),
        }),
    )
}

struct PreviewApp {
    /// Director plus the three simulated strands
    scheduler: FrameScheduler<'static, PreviewStrand, SmallRng>,
    /// Command sender for UI changes
    command_sender: CommandSender<'static, COMMAND_CHANNEL_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// When the next frame is due, in synthetic time
    next_deadline: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Target frame rate
    fps: u32,
    /// Selected animation in the jump selector
    selected: AnimationId,
    rotation_mode: RotationMode,
    rotation_frames: u32,
    /// Last error returned by the frame loop
    last_error: Option<EngineError>,
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Result<Self, EngineError> {
        let config: &'static EngineConfig = Box::leak(Box::new(EngineConfig::default()));
        let geometry = config.geometry;

        let director = Director::new(
            config,
            SmallRng::seed_from_u64(0x5EED),
            AnimationId::ALL.map(AnimationId::to_slot),
        )?;
        let scheduler = FrameScheduler::new(
            director,
            PreviewStrand::new(geometry.strand_len(Strand::Left)),
            PreviewStrand::new(geometry.strand_len(Strand::Right)),
            PreviewStrand::new(geometry.strand_len(Strand::Top)),
        )?;
        let selected = scheduler.director().active_id();

        Ok(Self {
            scheduler,
            command_sender: COMMANDS.sender(),
            t_ms: 0,
            next_deadline: 0,
            last_frame: StdInstant::now(),
            playing: true,
            fps: 30,
            selected,
            rotation_mode: RotationMode::Frames,
            rotation_frames: DEFAULT_ROTATION_FRAMES,
            last_error: None,
            led_size: LED_SIZE,
        })
    }

    fn send(&self, command: DirectorCommand) {
        let _ = self.command_sender.try_send(command);
    }

    fn send_rotation(&self) {
        self.send(DirectorCommand::SetRotation(
            self.rotation_mode.policy(self.rotation_frames),
        ));
    }

    /// Update synthetic time based on wall clock
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            #[allow(clippy::cast_possible_truncation)]
            let delta_ms = delta.as_millis().min(u128::from(u64::MAX)) as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Drain pending commands and tick the scheduler once the frame is due
    fn run_frame(&mut self) {
        COMMANDS
            .receiver()
            .process_pending(self.scheduler.director_mut());

        if !self.playing || self.t_ms < self.next_deadline {
            return;
        }
        match self.scheduler.tick(Instant::from_millis(self.t_ms)) {
            Ok(result) => {
                self.next_deadline = result.next_deadline.as_millis();
                self.last_error = None;
            }
            Err(error) => {
                self.next_deadline = self.t_ms + self.scheduler.frame_duration().as_millis();
                self.last_error = Some(error);
            }
        }
    }

    fn draw_triangle(&self, ui: &mut egui::Ui) {
        let available_width = ui.available_width();
        let height = (ui.available_height() - self.led_size).max(self.led_size);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
        let rect = response.rect.shrink(self.led_size);

        let top_left = rect.left_top();
        let top_right = rect.right_top();
        let apex = rect.center_bottom();

        let draw = |pixels: &[Rgb], from: egui::Pos2, to: egui::Pos2| {
            #[allow(clippy::cast_precision_loss)]
            let count = pixels.len().max(1) as f32;
            for (i, pixel) in pixels.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let t = (i as f32 + 0.5) / count;
                let center = from + (to - from) * t;
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.circle_filled(center, self.led_size / 2.0, color);
            }
        };

        draw(self.scheduler.strand(Strand::Top).pixels(), top_left, top_right);
        draw(self.scheduler.strand(Strand::Left).pixels(), top_left, apex);
        draw(self.scheduler.strand(Strand::Right).pixels(), top_right, apex);
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_frame();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if ui.button("⏭ Next").clicked() {
                            self.send(DirectorCommand::Next);
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("FPS:");
                        let old_fps = self.fps;
                        ui.add(egui::Slider::new(&mut self.fps, 1..=120));
                        if self.fps != old_fps {
                            self.scheduler.set_frame_duration(Duration::from_millis(
                                1000 / u64::from(self.fps),
                            ));
                        }
                    });

                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=24.0));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <AnimationControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Animation:");
                        let mut selected = self.selected;
                        egui::ComboBox::from_id_salt("animation_selector")
                            .selected_text(self.selected.as_str())
                            .show_ui(ui, |ui| {
                                for id in AnimationId::ALL {
                                    ui.selectable_value(&mut selected, id, id.as_str());
                                }
                            });
                        if selected != self.selected {
                            self.selected = selected;
                            self.send(DirectorCommand::Activate(selected));
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Rotate:");
                        let old_mode = self.rotation_mode;
                        ui.selectable_value(&mut self.rotation_mode, RotationMode::Frames, "frames");
                        ui.selectable_value(
                            &mut self.rotation_mode,
                            RotationMode::Completion,
                            "completion",
                        );
                        ui.selectable_value(&mut self.rotation_mode, RotationMode::Either, "either");

                        let old_frames = self.rotation_frames;
                        if self.rotation_mode != RotationMode::Completion {
                            ui.add(
                                egui::DragValue::new(&mut self.rotation_frames)
                                    .range(1u32..=10_000u32),
                            );
                        }
                        if self.rotation_mode != old_mode || self.rotation_frames != old_frames {
                            self.send_rotation();
                        }
                    });

                    ui.add_space(4.0);

                    let director = self.scheduler.director();
                    ui.label(format!(
                        "Playing: {} (frame {})",
                        director.active_id().as_str(),
                        director.frames_in_activation()
                    ));
                    if let Some(error) = &self.last_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
                    }
                });
                // </AnimationControls>
            });

            ui.add_space(16.0);

            self.draw_triangle(ui);
        });
    }
}
