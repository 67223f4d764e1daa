use eframe::egui;
use std::time::{Duration, Instant};

use crate::animation::ease_in_out;
use crate::autoplay::AutoPlay;
use crate::catalog;
use crate::config::{self, Config, Effects};
use crate::debounce::Debouncer;
use crate::effects::FrameLoop;
use crate::effects::particles::ParticleField;
use crate::effects::pointer::Tilt;
use crate::effects::trail::CursorTrail;
use crate::input::{KeyboardFocus, NavCommand, SwipeTracker, key_command};
use crate::render::navbar::{self, NavLinks};
use crate::render::{self, PageLayout, slide::SlideFrame, timeline};
use crate::slider::{ProductSlider, SlideChange};
use crate::theme::{self, Palette, Theme};

const PAGE_FADE_DELAY: Duration = Duration::from_millis(100);
const PAGE_FADE_DURATION: Duration = Duration::from_millis(500);
const RESIZE_SETTLE: Duration = Duration::from_millis(250);
const NAV_KEYS: [egui::Key; 4] = [
    egui::Key::ArrowLeft,
    egui::Key::ArrowUp,
    egui::Key::ArrowRight,
    egui::Key::ArrowDown,
];

/// Everything needed to open the showcase window, with CLI flags applied
/// over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    pub windowed: bool,
    /// 0-indexed.
    pub start_slide: usize,
    pub autoplay: Option<Duration>,
    pub effects: Effects,
}

impl LaunchOptions {
    pub fn resolve(
        config: &Config,
        windowed: bool,
        slide: Option<usize>,
        autoplay_ms: Option<u64>,
        no_effects: bool,
    ) -> anyhow::Result<Self> {
        let slide_count = catalog::slides().len();
        let start = slide.or(config.start_slide()).unwrap_or(1);
        if start == 0 || start > slide_count {
            anyhow::bail!("Invalid start slide: {start}. The showcase has slides 1-{slide_count}.");
        }

        let autoplay = match autoplay_ms.or(config.autoplay_ms()) {
            Some(ms) if ms < config::MIN_AUTOPLAY_MS => anyhow::bail!(
                "Invalid autoplay interval: {ms} ms. Must be at least {} ms.",
                config::MIN_AUTOPLAY_MS
            ),
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };

        let mut effects = config.effects();
        if no_effects {
            effects.particles = false;
            effects.cursor_trail = false;
        }

        Ok(Self {
            windowed: windowed || config.windowed(),
            start_slide: start - 1,
            autoplay,
            effects,
        })
    }
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start).as_secs_f32() >= 1.5
    }
}

/// Page opacity during the launch fade-in.
fn page_opacity(since_launch: Duration) -> f32 {
    if since_launch < PAGE_FADE_DELAY {
        return 0.0;
    }
    let t = (since_launch - PAGE_FADE_DELAY).as_secs_f32() / PAGE_FADE_DURATION.as_secs_f32();
    ease_in_out(t.clamp(0.0, 1.0))
}

struct ShowcaseApp {
    slider: ProductSlider,
    effects: Effects,
    /// Seeded on the first frame, once the viewport size is known.
    particles: Option<ParticleField>,
    particle_loop: FrameLoop,
    trail: CursorTrail,
    trail_loop: FrameLoop,
    autoplay: Option<AutoPlay>,
    swipe: SwipeTracker,
    focus: KeyboardFocus,
    nav_links: NavLinks,
    resize: Debouncer,
    viewport_size: Option<egui::Vec2>,
    /// Layout of the previous frame, used to hit-test raw pointer input.
    last_layout: Option<PageLayout>,
    last_pointer: Option<egui::Pos2>,
    launched_at: Instant,
    toast: Option<Toast>,
}

impl ShowcaseApp {
    fn new(slider: ProductSlider, options: &LaunchOptions, now: Instant) -> Self {
        let themes: Vec<Theme> = slider.slides().iter().map(|s| s.theme).collect();
        let mut trail = CursorTrail::new(theme::trail_palette(&themes));
        trail.update_color(slider.current());

        let autoplay = options.autoplay.map(|every| AutoPlay::start(every, now));
        let loop_for = |name, enabled| {
            if enabled {
                FrameLoop::new(name)
            } else {
                FrameLoop::stopped(name)
            }
        };

        Self {
            effects: options.effects,
            particles: None,
            particle_loop: loop_for("particles", options.effects.particles),
            trail,
            trail_loop: loop_for("cursor_trail", options.effects.cursor_trail),
            autoplay,
            swipe: SwipeTracker::default(),
            focus: KeyboardFocus::default(),
            nav_links: NavLinks::default(),
            resize: Debouncer::new(RESIZE_SETTLE),
            viewport_size: None,
            last_layout: None,
            last_pointer: None,
            launched_at: now,
            toast: None,
            slider,
        }
    }

    fn effects_running(&self) -> bool {
        self.particle_loop.is_running() || self.trail_loop.is_running()
    }

    /// Pause or resume both animation loops, respecting disabled effects.
    fn toggle_effects(&mut self) {
        if self.effects_running() {
            self.particle_loop.stop();
            self.trail_loop.stop();
            self.toast = Some(Toast::new("Effects paused".to_string()));
        } else {
            if self.effects.particles {
                self.particle_loop.resume();
            }
            if self.effects.cursor_trail {
                self.trail_loop.resume();
            }
            let message = if self.effects_running() {
                "Effects resumed"
            } else {
                "Effects are disabled in config"
            };
            self.toast = Some(Toast::new(message.to_string()));
        }
    }

    fn navigate(&mut self, command: NavCommand, now: Instant) {
        if let Some(change) = command.apply(&mut self.slider, now) {
            self.on_slide_change(change);
        }
    }

    fn on_slide_change(&mut self, change: SlideChange) {
        tracing::trace!(
            from = change.from,
            to = change.to,
            "trail color follows slide"
        );
        self.trail.update_color(change.to);
    }

    fn observe_viewport(&mut self, rect: egui::Rect, now: Instant) {
        let size = rect.size();
        if self.viewport_size == Some(size) {
            return;
        }
        match self.particles.as_mut() {
            Some(particles) if particles.size() == size => {}
            Some(particles) => particles.resize(size.x, size.y),
            None => self.particles = Some(ParticleField::new(size.x, size.y)),
        }
        if self.viewport_size.is_some() {
            self.resize.trigger(now);
        }
        self.viewport_size = Some(size);
    }

    fn handle_input(&mut self, ctx: &egui::Context, now: Instant) -> Vec<NavCommand> {
        let mut commands = Vec::new();
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut toggle_effects = false;
        let stage = self.last_layout.map(|l| l.stage);

        ctx.input(|i| {
            self.focus.observe(i);

            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }
            if i.key_pressed(egui::Key::P) {
                toggle_effects = true;
            }
            for key in NAV_KEYS {
                if i.key_pressed(key) {
                    commands.extend(key_command(key));
                }
            }

            // Pointer movement feeds the trail.
            if let Some(pos) = i.pointer.hover_pos() {
                if self.last_pointer != Some(pos) && self.trail_loop.is_running() {
                    self.trail.add_point(pos);
                }
                self.last_pointer = Some(pos);
            }

            // Touch input arrives as pointer events.
            if i.pointer.primary_pressed() {
                self.swipe.press(i.pointer.press_origin(), stage);
            }
            if i.pointer.primary_released() {
                commands.extend(self.swipe.release(i.pointer.interact_pos()));
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        if toggle_effects {
            self.toggle_effects();
        }

        if let Some(autoplay) = self.autoplay.as_mut() {
            let hovered = match (self.last_pointer, stage) {
                (Some(p), Some(stage)) => stage.contains(p),
                _ => false,
            };
            autoplay.set_hovered(hovered, now);
            if autoplay.poll(now) {
                commands.push(NavCommand::Next);
            }
        }

        commands
    }

    fn step_effects(&mut self, now: Instant) {
        if let Some(particles) = self.particles.as_mut() {
            self.particle_loop.drive(particles, now);
        }
        self.trail_loop.drive(&mut self.trail, now);
    }

    /// Ask for the next frame only as soon as something will change.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let decorations = self.slider.active_slide().decorations.len();
        let entrance_running = !self.slider.entrance().is_finished(decorations, now);
        let since_launch = now.saturating_duration_since(self.launched_at);
        let fading_in = since_launch < PAGE_FADE_DELAY + PAGE_FADE_DURATION;
        // An empty trail has nothing to decay until the pointer moves again.
        let effects_moving = self.particle_loop.is_running()
            || (self.trail_loop.is_running() && !self.trail.is_empty());
        if effects_moving
            || self.slider.is_animating(now)
            || entrance_running
            || fading_in
            || self.toast.is_some()
        {
            ctx.request_repaint();
            return;
        }

        let next = [
            self.autoplay.as_ref().and_then(AutoPlay::deadline),
            self.resize.deadline(),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(at) = next {
            ctx.request_repaint_after(at.saturating_duration_since(now));
        }
    }

    fn draw(&mut self, ui: &mut egui::Ui, now: Instant) -> Vec<NavCommand> {
        let rect = ui.max_rect();
        let layout = PageLayout::compute(rect);
        let scale = layout.scale;
        self.last_layout = Some(layout);

        let opacity = page_opacity(now.saturating_duration_since(self.launched_at));
        let focus_rings = self.focus.is_active();
        let mut commands = Vec::new();

        let pointer = self.last_pointer;
        let tilt = if self.effects.tilt {
            Tilt::toward(pointer, render::slide::text_panel_rect(layout.stage, scale))
        } else {
            Tilt::default()
        };
        let parallax_pointer = if self.effects.parallax { pointer } else { None };

        // Outgoing slide fades out under the incoming one.
        let progress = self.slider.transition_progress(now);
        if let Some(prev) = self.slider.previous() {
            let outgoing = SlideFrame {
                now,
                entrance: crate::animation::Entrance::settled(),
                tilt: Tilt::default(),
                pointer: parallax_pointer,
                viewport: layout.viewport,
                focus_rings: false,
                interactive: false,
            };
            let slide = &self.slider.slides()[prev];
            let fade_out = opacity * (1.0 - progress);
            render::slide::draw(ui, slide, layout.stage, &outgoing, fade_out, scale);
        }
        let incoming = SlideFrame {
            now,
            entrance: *self.slider.entrance(),
            tilt,
            pointer: parallax_pointer,
            viewport: layout.viewport,
            focus_rings,
            interactive: true,
        };
        if render::slide::draw(
            ui,
            self.slider.active_slide(),
            layout.stage,
            &incoming,
            opacity * progress,
            scale,
        ) {
            commands.push(NavCommand::Next);
        }

        commands.extend(timeline::draw(
            ui,
            layout.timeline,
            &self.slider,
            opacity,
            scale,
            focus_rings,
        ));
        commands.extend(navbar::draw(
            ui,
            layout.navbar,
            self.slider.accent(),
            &mut self.nav_links,
            opacity,
            scale,
            focus_rings,
        ));

        if self.effects.particles {
            if let Some(particles) = &self.particles {
                particles.paint(ui.painter(), layout.viewport.min);
            }
        }
        if self.effects.cursor_trail {
            self.trail.paint(ui.painter());
        }

        if let Some(toast) = &self.toast {
            draw_toast(ui, toast, layout.viewport, scale, now);
        }

        commands
    }
}

fn draw_toast(ui: &egui::Ui, toast: &Toast, rect: egui::Rect, scale: f32, now: Instant) {
    let opacity = toast.opacity(now);
    if opacity <= 0.0 {
        return;
    }
    let color = Theme::with_opacity(Palette::FOREGROUND, opacity * 0.9);
    let bg = Theme::with_opacity(Palette::SURFACE, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        toast.message.clone(),
        egui::FontId::proportional(20.0 * scale),
        color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.bottom() - 80.0 * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, color);
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.slider.tick(now);

        for command in self.handle_input(ctx, now) {
            self.navigate(command, now);
        }

        self.step_effects(now);

        if self.resize.poll(now) {
            if let Some(size) = self.viewport_size {
                tracing::info!(width = size.x, height = size.y, "viewport resized");
            }
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }

        let bg = Palette::BACKGROUND;
        let mut clicked = Vec::new();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                self.observe_viewport(ui.max_rect(), now);
                clicked = self.draw(ui, now);
            });

        for command in clicked {
            self.navigate(command, now);
        }

        self.schedule_repaint(ctx, Instant::now());
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let slider = ProductSlider::new(catalog::slides(), options.start_slide)?;
    let title = "Tamagon";

    tracing::info!(
        slides = slider.len(),
        start = options.start_slide + 1,
        autoplay_ms = options.autoplay.map(|d| d.as_millis() as u64),
        "showcase initialized"
    );
    tracing::info!("use arrow keys to navigate, swipe or drag to change slides");
    tracing::debug!(effects = ?options.effects, "effects");

    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(title)
    };

    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        title,
        native,
        Box::new(move |_cc| {
            let app = ShowcaseApp::new(slider, &options, Instant::now());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to open the showcase window: {e}"))?;

    tracing::info!("showcase closed");
    Ok(())
}
