//! VrHomeApp struct definition and constructor.

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::watch;
use winit::window::Window;

use vrhome_common::ViewId;
use vrhome_config::Settings;
use vrhome_platform::{select_display_mode, DisplayMode, InputRouter, SystemOpener};
use vrhome_renderer::{
    ButtonCache, FrameTasks, Highlighter, Scene, SharedRegistry, SharedScene, TextureCache,
    ThemeApplier, ViewRegistry,
};

use crate::texture_source::HttpTextureSource;

/// Startup options that outlive any single settings load.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub config_path: PathBuf,
    /// Theme forced on the command line; wins over every config reload.
    pub theme_override: Option<String>,
    pub force_mono: bool,
}

/// Top-level application state.
pub struct VrHomeApp {
    pub(super) options: LaunchOptions,
    pub(super) settings: Settings,
    pub(super) settings_rx: watch::Receiver<Settings>,
    pub(super) display: DisplayMode,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) window_size: (u32, u32),
    pub(super) cursor: Option<(f64, f64)>,

    // Scene-side launcher state
    pub(super) registry: SharedRegistry,
    pub(super) scene: SharedScene,
    pub(super) cache: Rc<TextureCache>,
    pub(super) applier: ThemeApplier,
    pub(super) highlighter: Highlighter,
    pub(super) tasks: FrameTasks,

    // Input and navigation
    pub(super) router: InputRouter,
    pub(super) opener: SystemOpener,
    pub(super) hovered: Option<ViewId>,
    pub(super) yaw: f32,
    pub(super) pitch: f32,

    pub(super) should_exit: bool,
    pub(super) needs_redraw: bool,
    pub(super) last_poll: Instant,
}

impl VrHomeApp {
    pub fn new(
        options: LaunchOptions,
        settings: Settings,
        settings_rx: watch::Receiver<Settings>,
        runtime: Handle,
    ) -> Self {
        let settings = super::scene_setup::with_overrides(settings, &options);
        let config = &settings.config;

        let source = Rc::new(HttpTextureSource::new(runtime, config.assets.root.clone()));
        let cache = Rc::new(TextureCache::new(source, config.cache.enabled));
        let buttons = Rc::new(ButtonCache::new(config.cache.enabled));
        let registry = ViewRegistry::shared();
        let scene = Scene::shared();
        let applier = ThemeApplier::new(registry.clone(), scene.clone(), cache.clone(), buttons);

        // Stereo output needs an XR runtime; desktop windows are always mono.
        let display = select_display_mode(&config.display, options.force_mono, false);

        let opener = SystemOpener::new(config.navigation.base_url.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("ignoring navigation.base_url: {e}");
            SystemOpener::default()
        });

        Self {
            options,
            settings,
            settings_rx,
            display,
            window: None,
            window_size: (0, 0),
            cursor: None,
            registry,
            scene,
            cache,
            applier,
            highlighter: Highlighter::default(),
            tasks: FrameTasks::new(),
            router: InputRouter::new(),
            opener,
            hovered: None,
            yaw: 0.0,
            pitch: 0.0,
            should_exit: false,
            needs_redraw: false,
            last_poll: Instant::now(),
        }
    }
}
