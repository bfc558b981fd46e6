use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::platform::{PlatformProvider, ServiceBinding, ServiceKind};
use crate::profile::ProfileTable;

#[derive(Debug, Serialize)]
pub struct BindingView {
    pub name: String,
    pub label: Option<String>,
    pub plan: Option<String>,
    pub kind: ServiceKind,
    pub profile: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BindingsReport {
    pub cloud: bool,
    pub application: Option<String>,
    pub bindings: Vec<BindingView>,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let report = collect(&ctx.platform, ctx.resolver.table());
    ctx.output.emit_lines(&text_lines(&report), &report)
}

pub fn collect<P: PlatformProvider + ?Sized>(platform: &P, table: &ProfileTable) -> BindingsReport {
    let Some(context) = platform.try_context() else {
        return BindingsReport {
            cloud: false,
            application: None,
            bindings: Vec::new(),
        };
    };

    BindingsReport {
        cloud: true,
        application: context.application_name().map(ToOwned::to_owned),
        bindings: context
            .service_bindings()
            .iter()
            .map(|binding| view(binding, table))
            .collect(),
    }
}

fn view(binding: &ServiceBinding, table: &ProfileTable) -> BindingView {
    BindingView {
        name: binding.name.clone(),
        label: binding.label.clone(),
        plan: binding.plan.clone(),
        kind: binding.kind,
        profile: table.profile_for(binding.kind).map(ToOwned::to_owned),
    }
}

fn text_lines(report: &BindingsReport) -> Vec<String> {
    if !report.cloud {
        return vec!["no cloud context".to_string()];
    }

    let application = report
        .application
        .as_deref()
        .unwrap_or("(unnamed application)");
    let mut lines = vec![format!("{application}: {} bindings", report.bindings.len())];
    lines.extend(
        report
            .bindings
            .iter()
            .enumerate()
            .map(|(index, binding)| format_binding(index, binding)),
    );
    lines
}

fn format_binding(index: usize, binding: &BindingView) -> String {
    let offering = match (binding.label.as_deref(), binding.plan.as_deref()) {
        (Some(label), Some(plan)) => format!(" {label}/{plan}"),
        (Some(label), None) => format!(" {label}"),
        _ => String::new(),
    };
    let profile = binding
        .profile
        .as_deref()
        .map(|profile| format!(" -> {profile}"))
        .unwrap_or_else(|| " (ignored)".to_string());

    format!(
        "{}. {} [{}]{}{}",
        index + 1,
        binding.name,
        binding.kind,
        offering,
        profile
    )
}
