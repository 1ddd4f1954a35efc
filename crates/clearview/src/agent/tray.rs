use tray_icon::menu::{Menu, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

pub const TOGGLE_MENU_ID: &str = "CLEARVIEW_TOGGLE_WINDOWS";
pub const QUIT_MENU_ID: &str = "CLEARVIEW_QUIT";

const ICON_SIZE: u32 = 22;

/// Two overlapping window outlines, drawn as a template image so macOS
/// tints it for light and dark menu bars.
fn stacked_windows_icon() -> Result<Icon, Box<dyn std::error::Error>> {
    let size = ICON_SIZE as usize;
    let mut rgba = vec![0u8; size * size * 4];

    let mut outline = |left: usize, top: usize, right: usize, bottom: usize| {
        for y in top..=bottom {
            for x in left..=right {
                let on_edge = x == left || x == right || y == top || y == bottom || y == top + 1;
                if on_edge {
                    let offset = (y * size + x) * 4;
                    rgba[offset..offset + 4].copy_from_slice(&[0, 0, 0, 255]);
                }
            }
        }
    };

    outline(7, 3, 19, 13);
    outline(3, 8, 15, 18);

    Ok(Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE)?)
}

/// Build the status item and its menu.
pub fn create_tray(toggle_label: &str) -> Result<TrayIcon, Box<dyn std::error::Error>> {
    let menu = Menu::with_items(&[
        &MenuItem::with_id(TOGGLE_MENU_ID, toggle_label, true, None),
        &PredefinedMenuItem::separator(),
        &MenuItem::with_id(QUIT_MENU_ID, "Quit ClearView", true, None),
    ])?;

    let tray = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_icon(stacked_windows_icon()?)
        .with_icon_as_template(true)
        .with_tooltip("ClearView")
        .build()?;

    Ok(tray)
}
