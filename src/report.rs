// src/report.rs

//! Plain-text rendering of engine results for the CLI.

use crate::dag::{CriticalPath, ExecutionLevel, ValidationReport};
use crate::refine::ImpactReport;

pub fn render_validation(report: &ValidationReport) -> String {
    let mut out = String::new();
    let status = if report.is_valid { "valid" } else { "INVALID" };
    out.push_str(&format!("plan is {status}\n"));

    if !report.cycles.is_empty() {
        out.push_str(&format!("\ncycles ({}):\n", report.cycles.len()));
        for cycle in &report.cycles {
            out.push_str(&format!("  {}\n", cycle.join(" -> ")));
        }
    }

    if !report.invalid_references.is_empty() {
        out.push_str(&format!(
            "\ninvalid references ({}):\n",
            report.invalid_references.len()
        ));
        for r in &report.invalid_references {
            out.push_str(&format!("  {r}\n"));
        }
    }

    if !report.resource_conflicts.is_empty() {
        out.push_str(&format!(
            "\nresource conflicts ({}, warnings only):\n",
            report.resource_conflicts.len()
        ));
        for c in &report.resource_conflicts {
            out.push_str(&format!("  {c}\n"));
        }
    }

    if report.is_valid {
        out.push('\n');
        out.push_str(&render_order(&report.execution_order));
        out.push_str(&format!(
            "\ncritical path ({}h): {}\n",
            report.critical_path_hours,
            report.critical_path.join(" -> ")
        ));
    }

    out
}

pub fn render_order(levels: &[ExecutionLevel]) -> String {
    let mut out = String::new();
    for (i, level) in levels.iter().enumerate() {
        out.push_str(&format!(
            "level {} ({} tasks): {}\n",
            i,
            level.len(),
            level.join(", ")
        ));
    }
    out
}

pub fn render_critical_path(cp: &CriticalPath) -> String {
    let mut out = format!("critical path ({}h): {}\n", cp.hours, cp.path.join(" -> "));
    if cp.schedule.is_empty() {
        return out;
    }

    out.push_str("\ntask  start  finish  slack\n");
    for e in &cp.schedule {
        let marker = if e.is_critical() { " *" } else { "" };
        out.push_str(&format!(
            "{}  {}  {}  {}{}\n",
            e.task_id, e.earliest_start, e.earliest_finish, e.slack, marker
        ));
    }
    out
}

pub fn render_impact(report: &ImpactReport) -> String {
    let mut out = format!("refinement of {}\n", report.task_id);

    for w in &report.warnings {
        out.push_str(&format!("  warning: {w}\n"));
    }

    let status = if report.is_valid { "valid" } else { "INVALID" };
    out.push_str(&format!("  resulting plan is {status}\n"));

    if report.affected_task_ids.is_empty() {
        out.push_str("  affected tasks: none\n");
    } else {
        out.push_str(&format!(
            "  affected tasks: {}\n",
            report.affected_task_ids.join(", ")
        ));
    }

    out.push_str(&format!("  effort delta: {:+}h\n", report.effort_delta));

    let precision = if report.timeline_exact { "" } else { " (approximate)" };
    if report.critical_path_extended {
        out.push_str(&format!(
            "  critical path extended by {}h{precision}\n",
            report.critical_path_delta
        ));
    } else {
        out.push_str(&format!(
            "  critical path delta: {:+}h{precision}\n",
            report.critical_path_delta
        ));
    }

    if let Some(new_hours) = report.new_critical_path_hours {
        out.push_str(&format!(
            "  critical path: {}h -> {}h\n",
            report.original_critical_path_hours, new_hours
        ));
    }

    for cycle in &report.cycles {
        out.push_str(&format!("  cycle: {}\n", cycle.join(" -> ")));
    }
    for r in &report.invalid_references {
        out.push_str(&format!("  invalid reference: {r}\n"));
    }
    for c in &report.resource_conflicts {
        out.push_str(&format!("  resource conflict: {c}\n"));
    }
    if !report.potential_conflicts.is_empty() {
        out.push_str(&format!(
            "  dependents sharing the new assignee: {}\n",
            report.potential_conflicts.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::{estimate_critical_path, validate};
    use crate::refine::{RefinementChange, analyze_refinement};
    use crate::types::{Hours, TaskDraft};

    fn plan() -> Vec<TaskDraft> {
        vec![
            TaskDraft::new("T1", "one").with_duration(Hours::new(5.0).unwrap()),
            TaskDraft::new("T2", "two").with_duration(Hours::new(2.0).unwrap()),
            TaskDraft::new("T3", "three")
                .with_duration(Hours::new(3.0).unwrap())
                .after("T1"),
        ]
    }

    #[test]
    fn valid_plan_output() {
        let text = render_validation(&validate(&plan()));
        assert!(text.starts_with("plan is valid"));
        assert!(text.contains("level 0 (2 tasks): T1, T2"));
        assert!(text.contains("critical path (8h): T1 -> T3"));
    }

    #[test]
    fn invalid_plan_output() {
        let d = vec![TaskDraft::new("A", "a").after("B"), TaskDraft::new("B", "b").after("A")];
        let text = render_validation(&validate(&d));
        assert!(text.starts_with("plan is INVALID"));
        assert!(text.contains("A -> B -> A"));
        assert!(!text.contains("level 0"));
    }

    #[test]
    fn schedule_table_marks_critical_tasks() {
        let text = render_critical_path(&estimate_critical_path(&plan()));
        assert!(text.contains("T2  0  2  6\n"));
        assert!(text.contains("T3  5  8  0 *\n"));
    }

    #[test]
    fn fractional_chain_prints_zero_slack() {
        let d = vec![
            TaskDraft::new("a", "a").with_duration(Hours::new(0.1).unwrap()),
            TaskDraft::new("b", "b")
                .with_duration(Hours::new(0.2).unwrap())
                .after("a"),
        ];
        let text = render_critical_path(&estimate_critical_path(&d));
        assert!(text.contains("a  0  0.1  0 *\n"), "{text}");
        assert!(text.contains("b  0.1  0.30000000000000004  0 *\n"), "{text}");
    }

    #[test]
    fn impact_output() {
        let change = RefinementChange::new("T1").with_duration(Hours::new(7.0).unwrap());
        let text = render_impact(&analyze_refinement(&plan(), &change));
        assert!(text.contains("affected tasks: T3"));
        assert!(text.contains("effort delta: +2h"));
        assert!(text.contains("critical path extended by 2h\n"));
        assert!(text.contains("critical path: 8h -> 10h"));
    }
}
