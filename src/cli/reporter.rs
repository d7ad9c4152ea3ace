// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::model::CollisionModel;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report the contents of one collision model
    pub fn report_model(model: &CollisionModel) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {} {}",
            "Model:".bold(),
            model.model_name.cyan(),
            format!("(COL v{})", model.version.number()).bright_black()
        );
        println!("{}", "━".repeat(80).bright_black());

        Self::print_count("Vertices", model.mesh_vertices.len());
        Self::print_count("Faces", model.mesh_faces.len());
        Self::print_count("Face groups", model.face_groups.len());
        Self::print_count("Spheres", model.spheres.len());
        Self::print_count("Boxes", model.boxes.len());
        if model.has_shadow_mesh() {
            Self::print_count("Shadow vertices", model.shadow_vertices.len());
            Self::print_count("Shadow faces", model.shadow_faces.len());
        }

        let b = &model.bounds;
        println!(
            "  {} [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
            "Bounds:".bright_black(),
            b.min.x,
            b.min.y,
            b.min.z,
            b.max.x,
            b.max.y,
            b.max.z
        );
        println!(
            "  {} {} {}",
            "Radius:".bright_black(),
            format!("{:.3}", b.radius).yellow(),
            format!("around [{:.3}, {:.3}, {:.3}]", b.center.x, b.center.y, b.center.z)
                .bright_black()
        );
    }

    /// Report an export result
    pub fn report_export(target: &str, bytes: usize, duration: Duration) {
        println!(
            "{} {} {} {}",
            "✅".green(),
            format!("{} bytes", bytes).green(),
            format!("-> {}", target).cyan(),
            format!("in {}", Self::format_duration(duration)).bright_black()
        );
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    fn print_count(name: &str, count: usize) {
        let value = if count == 0 {
            count.to_string().bright_black()
        } else {
            count.to_string().cyan()
        };
        println!("  {} {}", format!("{}:", name).bright_black(), value);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }
}
