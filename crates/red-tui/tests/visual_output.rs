//! Visual test that shows the actual rendered dashboard.
//! Run with: cargo test --test visual_output -- --nocapture

use red_tui::dashboard::Dashboard;

#[test]
fn visual_full_dashboard() {
    let output = Dashboard::render();

    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║ DASHBOARD RENDER - Visual Output");
    println!("╚════════════════════════════════════════════════════════════════╝\n");
    println!("{}", output);

    println!("OUTPUT WITH LINE NUMBERS:\n");
    for (i, line) in output.lines().enumerate() {
        println!("{:3} │ {}", i + 1, line);
    }

    println!("\nMETADATA:");
    println!("  Total lines: {}", output.lines().count());
    println!(
        "  Max width: {}",
        output.lines().map(|l| l.chars().count()).max().unwrap_or(0)
    );
    println!("  Char count: {}", output.chars().count());
}

#[test]
fn visual_panel_blocks() {
    println!("\n╔════════════════════════════════════════════════════════════════╗");
    println!("║ PANEL BLOCKS - One at a time");
    println!("╚════════════════════════════════════════════════════════════════╝\n");

    for panel in Dashboard::panels() {
        println!("── {} ──", panel.title);
        for line in panel.render_lines() {
            println!("{line}");
        }
        println!();
    }
}

#[test]
fn visual_content_analysis() {
    let output = Dashboard::render();

    println!("\nCONTENT ANALYSIS:");
    let keywords = [
        "Renewable Energy Dashboard",
        "Solar Energy",
        "Wind Energy",
        "Hydropower",
        "Geothermal Energy",
        "Weather Forecast",
        "00:00",
        "18:00",
        "total",
    ];
    for keyword in keywords {
        let count = output.matches(keyword).count();
        if count > 0 {
            println!("  '{}': {} occurrences", keyword, count);
        }
    }
}
