//! Pipe-Router (headless).
//!
//! Spielt eine Folge synthetischer Eingabe-Frames gegen den Editor ab
//! und protokolliert die entstehende Rohr-Geometrie.

use anyhow::Context;
use glam::{Vec2, Vec3};
use pipe_router::{
    ui, AppController, AppIntent, AppState, ControlRef, EditorOptions, InputTracker, Key,
    MouseButton, SimDevice,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Pipe-Router v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut app = EditorApp::new();
        app.build_demo_scene()?;
        app.play_script()?;
        app.report();
        Ok(())
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    tracker: InputTracker,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        state
            .view
            .camera
            .look_at(Vec3::new(6.0, 8.0, 10.0), Vec3::new(2.0, 0.0, 1.0));

        let mut tracker = InputTracker::new();
        tracker.resized(Vec2::new(1280.0, 720.0));

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            tracker,
        }
    }

    /// Tank → Rohr mit Ecke → Verbraucher.
    fn build_demo_scene(&mut self) -> anyhow::Result<()> {
        let tank = SimDevice::tank(Vec3::new(0.0, 1.95, 0.0));
        let engine = SimDevice::engine(Vec3::new(4.0, 0.0, 2.0), vec![Vec3::ZERO]);
        let start = tank.connection_world(0).context("Tank ohne Anschluss")?;
        let end = engine.connection_world(0).context("Verbraucher ohne Anschluss")?;
        self.state.scene.add_device(tank);
        self.state.scene.add_device(engine);

        self.controller.handle_intent(
            &mut self.state,
            AppIntent::AddTubeRequested {
                positions: vec![start, Vec3::new(0.0, 0.0, 2.0), end],
            },
        )?;
        self.controller.handle_intent(
            &mut self.state,
            AppIntent::AddTubeRequested {
                positions: vec![Vec3::new(-2.0, 0.0, 0.0), Vec3::new(-2.0, 2.0, 0.0)],
            },
        )?;
        // Erster Frame übernimmt die Viewport-Größe
        self.frame()
    }

    /// Verarbeitet den aktuellen Tracker-Zustand als einen Frame.
    fn frame(&mut self) -> anyhow::Result<()> {
        let snapshot = self.tracker.snapshot();
        self.controller
            .update_frame(&mut self.state, &mut self.input, &snapshot)?;
        self.tracker.end_frame();
        Ok(())
    }

    fn screen_of(&self, r: ControlRef) -> anyhow::Result<Vec2> {
        let position = self
            .state
            .scene
            .control(r)
            .with_context(|| format!("Kontrollpunkt {r:?} fehlt"))?
            .position;
        self.state
            .view
            .camera
            .world_to_screen(position, self.state.view.viewport_size)
            .with_context(|| format!("Kontrollpunkt {r:?} hinter der Kamera"))
    }

    fn click(&mut self, screen: Vec2) -> anyhow::Result<()> {
        self.tracker.cursor_moved(screen);
        self.tracker.button_event(MouseButton::Primary, true);
        self.frame()
    }

    fn drag_by(&mut self, delta: Vec2) -> anyhow::Result<()> {
        let target = self.tracker.snapshot().pointer_pos + delta;
        self.tracker.cursor_moved(target);
        self.frame()
    }

    fn release(&mut self) -> anyhow::Result<()> {
        self.tracker.button_event(MouseButton::Primary, false);
        self.frame()
    }

    fn tap(&mut self, key: Key) -> anyhow::Result<()> {
        self.tracker.key_event(key, true);
        self.frame()?;
        self.tracker.key_event(key, false);
        self.frame()
    }

    fn play_script(&mut self) -> anyhow::Result<()> {
        // 1. Rohrende picken und nach oben extrudieren
        let tail = self.screen_of(ControlRef::new(0, 2))?;
        self.click(tail)?;
        self.release()?;
        self.tracker.cursor_moved(tail + Vec2::new(0.0, -80.0));
        self.tap(self.state.options.key_bindings.extrude)?;
        log::info!("Nach Extrude: {:?}", self.state.edit_state());

        // 2. Neuen Punkt wieder löschen
        self.tap(self.state.options.key_bindings.delete)?;

        // 3. Eckpunkt frei ziehen, dann achsenbeschränkt
        let corner = self.screen_of(ControlRef::new(0, 1))?;
        self.click(corner)?;
        self.drag_by(Vec2::new(25.0, 10.0))?;
        self.tracker
            .key_event(self.state.options.key_bindings.axis_lock, true);
        self.drag_by(Vec2::new(40.0, 5.0))?;
        log::info!("Während Drag: {:?}", self.state.edit_state());
        self.tracker
            .key_event(self.state.options.key_bindings.axis_lock, false);
        self.release()?;

        // 4. Ecke per Scroll runden
        let modifier = self.state.options.key_bindings.bevel_number_modifier;
        self.tracker.key_event(modifier, true);
        for _ in 0..2 {
            self.tracker.scrolled(Vec2::new(0.0, 1.0));
            self.frame()?;
        }
        self.tracker.key_event(modifier, false);
        self.frame()?;

        // 5. Drücke übernehmen
        self.controller
            .handle_intent(&mut self.state, AppIntent::SimulationStepRequested)?;
        Ok(())
    }

    fn report(&self) {
        let scene = self.controller.build_render_scene(&self.state);
        for (index, tube) in scene.tubes.iter().enumerate() {
            log::info!(
                "Rohr {}: {} Kontrollpunkte, {} Ringe, {} Dreiecke, Druck {:.2}",
                index,
                tube.path_positions.len() / 3,
                tube.mesh.ring_count(),
                tube.mesh.triangle_count(),
                tube.pressure
            );
        }
        log::info!(
            "Gesamt: {} Dreiecke, {} Commands, Selektion {:?}",
            scene.triangle_count(),
            self.state.command_log.len(),
            scene.selection
        );
    }
}
