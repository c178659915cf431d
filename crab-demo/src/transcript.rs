//! Console transcript rendering
//!
//! Pure functions over a [`DemoWorld`]: they read live state and return
//! lines (or a JSON value) without printing anything.

use crate::config::{Config, OutputFormat};
use crate::scenario::DemoWorld;
use serde_json::{Value, json};
use shared::money::format_currency;
use shared::views::{BranchView, MenuItemView, OrderView, view_of};

pub const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Status lines of the demo, in print order
pub fn render_text(world: &DemoWorld, currency: &str) -> anyhow::Result<Vec<String>> {
    let branch = world.branch()?;
    let mut lines = Vec::new();

    lines.push(format!("Welcome to {}!", branch.name()));

    {
        let manager = world.manager.read();
        lines.push(format!("Manager: {}", manager.name()));

        lines.push(format!("Waiter Team of {}:", manager.name()));
        lines.extend(manager.waiters().iter().map(|w| w.to_string()));

        lines.push(format!("Chef Team of {}:", manager.name()));
        lines.extend(manager.chefs().iter().map(|c| c.to_string()));
    }

    lines.push("Available Menu Items:".to_string());
    lines.push("Menu Items:".to_string());
    for item in world.menu.items() {
        let item = item.read();
        lines.push(format!("{} - {}", item.name, format_currency(item.price(), currency)));
    }

    lines.push("Reservation Details:".to_string());
    lines.push(format!("Reservations in {} branch:", branch.name()));
    for reservation in branch.reservations() {
        lines.extend(reservation.read().details());
    }

    lines.push("Order Details:".to_string());
    let order = world.order.read();
    let total = format_currency(order.calculate_total(), currency);
    lines.push(format!(
        "Order #{} - Status: {}, Total: {}",
        order.id(),
        order.status(),
        total
    ));
    lines.push(format!("Total: {total}"));

    Ok(lines)
}

/// JSON snapshot of the branch, the menu and the order
pub fn render_json(world: &DemoWorld) -> anyhow::Result<Value> {
    let branch = BranchView::from(world.branch()?);
    let menu: Vec<MenuItemView> = world.menu.items().iter().map(view_of).collect();
    let order: OrderView = view_of(&world.order);

    Ok(json!({
        "branch": branch,
        "menu": menu,
        "order": order,
    }))
}

/// Everything the binary writes to stdout for `config`
///
/// Text mode ends with the exit prompt when the run waits for Enter. JSON
/// mode is the bare document so the output stays parseable.
pub fn render_output(world: &DemoWorld, config: &Config) -> anyhow::Result<String> {
    match config.output_format {
        OutputFormat::Text => {
            let mut out = render_text(world, &config.currency_symbol)?.join("\n");
            out.push('\n');
            if config.prompts_on_exit() {
                out.push_str(&format!("\n{EXIT_PROMPT}\n"));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&render_json(world)?)?;
            out.push('\n');
            Ok(out)
        }
    }
}
