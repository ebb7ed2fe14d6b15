//! Scene-level drawing of an environment.

use tracing::debug;

use arena_core::enums::GamePhase;
use arena_core::projectile::Projectile;
use arena_core::types::{ImageHandle, Rect};
use arena_sim::Environment;

use crate::canvas::{Canvas, Color, LifeBar};

/// Projectile sprites are drawn this far below the projectile's position.
pub const PROJECTILE_SPRITE_OFFSET_Y: i32 = 30;

/// The victory screen is drawn larger than its natural size.
pub const VICTORY_SCREEN_SCALE: f64 = 1.5;

/// Everything a frame is made of, one scene element at a time.
pub trait EnvironmentDrawer {
    fn clear_environment(&mut self);
    fn draw_background(&mut self);
    /// Roster agents in roster order, then the protagonist on top.
    fn draw_agents(&mut self);
    /// The protagonist's life bar.
    fn draw_life_bar(&mut self);
    fn draw_status_panel(&mut self);
    fn draw_pause_screen(&mut self);
    fn draw_victory_screen(&mut self);
    fn draw_game_over_screen(&mut self);
    fn draw_projectile(&mut self, projectile: &Projectile);
}

/// Draws an `Environment` on a `Canvas`. Never mutates the environment.
pub struct Mediator<'a, C: Canvas> {
    environment: &'a Environment,
    canvas: &'a mut C,
}

impl<'a, C: Canvas> Mediator<'a, C> {
    pub fn new(environment: &'a Environment, canvas: &'a mut C) -> Self {
        Self {
            environment,
            canvas,
        }
    }

    /// Draw a complete frame for the given phase: scene, projectiles, and
    /// the phase's overlay screen if it has one.
    pub fn render_frame(&mut self, phase: GamePhase) {
        self.clear_environment();
        self.draw_background();
        self.draw_agents();
        let environment = self.environment;
        for projectile in environment.projectiles() {
            self.draw_projectile(projectile);
        }
        match phase {
            GamePhase::Running => {}
            GamePhase::Paused => self.draw_pause_screen(),
            GamePhase::Victory => self.draw_victory_screen(),
            GamePhase::GameOver => self.draw_game_over_screen(),
        }
    }

    fn draw_overlay(&mut self, image: Option<&ImageHandle>, scale: f64) {
        let Some(image) = image else {
            debug!("no overlay image configured");
            return;
        };
        let Some((width, height)) = self.canvas.image_size(image) else {
            debug!(image = image.key(), "overlay image size unknown");
            return;
        };
        let dest = centered(
            width,
            height,
            scale,
            self.environment.width(),
            self.environment.height(),
        );
        self.canvas.draw_screen(image, dest);
    }
}

/// Rectangle of an image scaled by `scale` and centered on the screen.
pub fn centered(width: i32, height: i32, scale: f64, screen_width: i32, screen_height: i32) -> Rect {
    let w = (width as f64 * scale).round() as i32;
    let h = (height as f64 * scale).round() as i32;
    Rect::new((screen_width - w) / 2, (screen_height - h) / 2, w, h)
}

impl<C: Canvas> EnvironmentDrawer for Mediator<'_, C> {
    fn clear_environment(&mut self) {
        self.canvas
            .clear_screen(self.environment.width(), self.environment.height());
    }

    fn draw_background(&mut self) {
        let env = self.environment;
        self.canvas.draw_image(
            env.images().background.as_ref(),
            Rect::new(env.x(), env.y(), env.width(), env.height()),
        );
    }

    fn draw_agents(&mut self) {
        let env = self.environment;
        for agent in env.agents() {
            self.canvas.draw_image(agent.image.as_ref(), agent.bounds());
            let bar = LifeBar::above(agent);
            self.canvas.draw_life_bar(&bar, Color::DarkRed);
        }
        if let Some(protagonist) = env.protagonist() {
            self.canvas
                .draw_image(protagonist.image.as_ref(), protagonist.bounds());
            self.draw_life_bar();
            self.draw_status_panel();
        }
    }

    fn draw_life_bar(&mut self) {
        if let Some(p) = self.environment.protagonist() {
            let bar = LifeBar::above(p);
            self.canvas.draw_life_bar(&bar, Color::Green);
        }
    }

    fn draw_status_panel(&mut self) {
        if let Some(p) = self.environment.protagonist() {
            self.canvas.draw_status_panel(p.x(), p.y());
        }
    }

    fn draw_pause_screen(&mut self) {
        let env = self.environment;
        self.draw_overlay(env.images().pause.as_ref(), 1.0);
    }

    fn draw_victory_screen(&mut self) {
        let env = self.environment;
        self.draw_overlay(env.images().victory.as_ref(), VICTORY_SCREEN_SCALE);
    }

    fn draw_game_over_screen(&mut self) {
        let env = self.environment;
        self.draw_overlay(env.images().game_over.as_ref(), 1.0);
    }

    fn draw_projectile(&mut self, projectile: &Projectile) {
        let dest = Rect::new(
            projectile.position.x,
            projectile.position.y + PROJECTILE_SPRITE_OFFSET_Y,
            projectile.size.width,
            projectile.size.height,
        );
        self.canvas.draw_image(projectile.image.as_ref(), dest);
    }
}
