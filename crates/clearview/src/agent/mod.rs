//! Menu-bar agent: a status item with a toggle entry plus an optional
//! global hotkey, both driving one [`ToggleController`].
//!
//! Tray menu and hotkey callbacks fire on their own threads, so they are
//! forwarded into the winit event loop as [`AgentEvent`]s and handled on the
//! main thread.

mod hotkey;
mod tray;

use global_hotkey::GlobalHotKeyEvent;
use tracing::{error, info, warn};
use tray_icon::TrayIcon;
use tray_icon::menu::MenuEvent;
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
use winit::window::WindowId;

use clearview_core::permissions::{PermissionStatus, probe_automation};
use clearview_core::{
    ClearviewConfig, Desktop, ToggleController, ToggleOutcome, ToggleSettings, WindowRegistry,
};

use hotkey::RegisteredHotkey;

#[derive(Debug)]
enum AgentEvent {
    Menu(MenuEvent),
    HotKey(GlobalHotKeyEvent),
}

struct Agent {
    controller: ToggleController<Desktop, Desktop>,
    toggle_label: String,
    hotkey: Option<RegisteredHotkey>,
    _tray: Option<TrayIcon>,
    startup_error: Option<Box<dyn std::error::Error>>,
}

impl Agent {
    fn new(config: &ClearviewConfig) -> Self {
        let controller = ToggleController::new(
            WindowRegistry::new(),
            Desktop::new(),
            Desktop::new(),
            ToggleSettings::from(config),
        );

        let hotkey = if config.hotkey.enabled {
            match hotkey::register(&config.hotkey.toggle) {
                Ok(registered) => Some(registered),
                Err(e) => {
                    eprintln!("Global hotkey unavailable: {}", e);
                    warn!(event = "cli.agent.hotkey_unavailable", error = %e);
                    None
                }
            }
        } else {
            info!(event = "cli.agent.hotkey_disabled");
            None
        };

        let toggle_label = match &hotkey {
            Some(registered) => format!(
                "Toggle Windows ({})",
                hotkey::chord_symbols(&registered.chord)
            ),
            None => "Toggle Windows".to_string(),
        };

        Self {
            controller,
            toggle_label,
            hotkey,
            _tray: None,
            startup_error: None,
        }
    }

    fn toggle(&mut self, trigger: &'static str) {
        info!(event = "cli.agent.toggle_triggered", trigger = trigger);

        match self.controller.toggle() {
            ToggleOutcome::Hidden { hidden, failed } => info!(
                event = "cli.agent.toggle_completed",
                state = "hidden",
                hidden = hidden,
                failed = failed
            ),
            ToggleOutcome::Restored {
                restored,
                skipped,
                failed,
            } => info!(
                event = "cli.agent.toggle_completed",
                state = "restored",
                restored = restored,
                skipped = skipped,
                failed = failed
            ),
        }
    }
}

impl ApplicationHandler<AgentEvent> for Agent {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        if !matches!(cause, StartCause::Init) {
            return;
        }

        // The status item must be created once the loop is running.
        match tray::create_tray(&self.toggle_label) {
            Ok(tray) => {
                info!(event = "cli.agent.tray_created");
                self._tray = Some(tray);
            }
            Err(e) => {
                error!(event = "cli.agent.tray_failed", error = %e);
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: AgentEvent) {
        match event {
            AgentEvent::Menu(event) => match event.id().as_ref() {
                tray::TOGGLE_MENU_ID => self.toggle("menu"),
                tray::QUIT_MENU_ID => {
                    info!(event = "cli.agent.quit_requested");
                    event_loop.exit();
                }
                other => warn!(event = "cli.agent.unknown_menu_item", id = other),
            },
            AgentEvent::HotKey(event) => {
                let registered = self.hotkey.as_ref().map(|h| h.id);
                if hotkey::should_toggle(registered, event.id(), event.state()) {
                    self.toggle("hotkey");
                }
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, _event: WindowEvent) {
    }
}

/// Run the menu-bar agent until the user picks Quit.
pub fn run(config: ClearviewConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        event = "cli.agent.start_started",
        hotkey_enabled = config.hotkey.enabled,
        restore_delay_ms = config.restore.delay_ms
    );

    if let PermissionStatus::Denied { message } = probe_automation() {
        eprintln!(
            "Automation permission missing ({}). Run `clearview check` for setup steps.",
            message
        );
    }

    let mut builder = EventLoop::<AgentEvent>::with_user_event();
    builder.with_activation_policy(ActivationPolicy::Accessory);
    let event_loop = builder.build()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let menu_proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = menu_proxy.send_event(AgentEvent::Menu(event));
    }));

    let hotkey_proxy = event_loop.create_proxy();
    GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
        let _ = hotkey_proxy.send_event(AgentEvent::HotKey(event));
    }));

    let mut agent = Agent::new(&config);
    info!(event = "cli.agent.start_completed");

    event_loop.run_app(&mut agent)?;

    if let Some(e) = agent.startup_error.take() {
        return Err(e);
    }

    if agent.controller.is_hidden() {
        info!(
            event = "cli.agent.exit_with_hidden_windows",
            count = agent.controller.registry().len()
        );
        for record in agent.controller.registry().iter() {
            warn!(
                event = "cli.agent.window_left_minimized",
                pid = record.process.pid.0,
                app_name = %record.process.name,
                title = %record.title
            );
        }
    }

    Ok(())
}
