//! Pure HTML rendering: records in, markup out.
//!
//! Grouping contract: released records first, then upcoming/imminent, with a
//! divider between the groups only when both are non-empty; within each
//! group the original order is preserved.  All record fields are
//! HTML-escaped — the batch ultimately comes from an LLM.

use std::fmt::Write as _;

use frontier_catalog::prompt::TAG_VOCABULARY;
use frontier_catalog::record::{Lab, ModelRecord, Status};

use crate::filter::{ALL, FilterDimension, FilterSet};
use crate::state::{CatalogSource, CatalogStats};
use crate::theme::{THEME_STORAGE_KEY, Theme};

/// Per-card animation stagger, in milliseconds.
const CARD_DELAY_STEP_MS: usize = 40;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a single model card.
pub fn render_card(record: &ModelRecord, delay_ms: usize) -> String {
    let tags: String = record
        .tags
        .iter()
        .map(|tag| {
            format!(
                r#"<span class="tag tag-{}">{}</span>"#,
                escape_html(tag),
                escape_html(tag)
            )
        })
        .collect();

    let note = match &record.note {
        Some(note) => format!(r#"<div class="model-note">{}</div>"#, escape_html(note)),
        None => String::new(),
    };

    format!(
        r#"<div class="model-card" style="--card-color:{color}; animation-delay:{delay_ms}ms">
  <div class="model-logo" style="background:{logo_bg}">{logo}</div>
  <div class="model-info">
    <div class="model-name">{name}</div>
    <div class="model-desc">{desc}</div>
    <div class="model-tags">{tags}</div>
    {note}
  </div>
  <div class="model-meta">
    <div class="model-date">{date}</div>
    <div class="status-badge status-{status}"><div class="s-dot"></div>{status_label}</div>
  </div>
</div>"#,
        color = escape_html(&record.color),
        logo_bg = escape_html(&record.logo_bg),
        logo = escape_html(&record.logo),
        name = escape_html(&record.name),
        desc = escape_html(&record.desc),
        date = escape_html(&record.date),
        status = record.status.as_str(),
        status_label = record.status.label(),
    )
}

/// Render the grouped card list for an already-filtered set of records.
pub fn render_catalog(visible: &[&ModelRecord]) -> String {
    let (released, upcoming): (Vec<&ModelRecord>, Vec<&ModelRecord>) = visible
        .iter()
        .copied()
        .partition(|r| r.status == Status::Released);

    let mut html = String::new();
    for (i, record) in released.iter().enumerate() {
        html.push_str(&render_card(record, i * CARD_DELAY_STEP_MS));
        html.push('\n');
    }
    if !upcoming.is_empty() {
        if !released.is_empty() {
            html.push_str(r#"<div class="divider">Upcoming &amp; imminent</div>"#);
            html.push('\n');
        }
        for (i, record) in upcoming.iter().enumerate() {
            html.push_str(&render_card(
                record,
                (released.len() + i) * CARD_DELAY_STEP_MS,
            ));
            html.push('\n');
        }
    }
    html
}

/// `"7 models shown"` / `"1 model shown"`.
pub fn results_count(visible: usize) -> String {
    format!(
        "{visible} model{} shown",
        if visible == 1 { "" } else { "s" }
    )
}

fn render_stats(stats: &CatalogStats) -> String {
    format!(
        r#"<div class="stats">
  <div class="stat"><div class="stat-num">{}</div><div class="stat-label">Tracked</div></div>
  <div class="stat"><div class="stat-num">{}</div><div class="stat-label">Released</div></div>
  <div class="stat"><div class="stat-num">{}</div><div class="stat-label">Upcoming</div></div>
  <div class="stat"><div class="stat-num">{}</div><div class="stat-label">Labs</div></div>
</div>"#,
        stats.total, stats.released, stats.upcoming, stats.labs
    )
}

/// Query string for the page with one dimension overridden, every other
/// active dimension and the search text preserved.
fn pill_href(filters: &FilterSet, dimension: FilterDimension, value: &str) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    for (key, dim) in [
        ("status", FilterDimension::Status),
        ("lab", FilterDimension::Lab),
        ("cap", FilterDimension::Capability),
    ] {
        let current = if dim == dimension {
            value.to_owned()
        } else {
            filters.value_of(dim)
        };
        if current != ALL {
            pairs.push((key, current));
        }
    }
    if !filters.search.is_empty() {
        pairs.push(("q", filters.search.clone()));
    }

    if pairs.is_empty() {
        return "/".to_owned();
    }
    let query: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect();
    format!("/?{}", query.join("&"))
}

fn render_pill_group(
    out: &mut String,
    filters: &FilterSet,
    dimension: FilterDimension,
    label: &str,
    values: &[&str],
) {
    let active = filters.value_of(dimension);
    let _ = write!(out, r#"<div class="pill-row"><span class="pill-row-label">{label}</span>"#);
    for value in std::iter::once(&ALL).chain(values.iter()) {
        let class = if *value == active { "pill active" } else { "pill" };
        let _ = write!(
            out,
            r#"<a class="{class}" href="{href}">{value}</a>"#,
            href = pill_href(filters, dimension, value),
        );
    }
    out.push_str("</div>\n");
}

fn render_search_form(filters: &FilterSet) -> String {
    let mut hidden = String::new();
    for (key, dim) in [
        ("status", FilterDimension::Status),
        ("lab", FilterDimension::Lab),
        ("cap", FilterDimension::Capability),
    ] {
        let value = filters.value_of(dim);
        if value != ALL {
            let _ = write!(
                hidden,
                r#"<input type="hidden" name="{key}" value="{}">"#,
                escape_html(&value)
            );
        }
    }
    format!(
        r#"<form class="search" method="get" action="/">
  {hidden}<input id="searchInput" name="q" type="search" placeholder="Search models, labs, capabilities…" value="{q}">
</form>"#,
        q = escape_html(&filters.search)
    )
}

const STYLE: &str = r#"
:root { color-scheme: dark; }
[data-theme="void"] { --bg:#06060a; --fg:#e8e8f0; --muted:#8a8a9a; --card:#101018; }
[data-theme="dawn"] { --bg:#16121e; --fg:#f2e9e1; --muted:#a89a8c; --card:#221b2d; }
[data-theme="mono"] { --bg:#000; --fg:#ddd; --muted:#777; --card:#111; }
body { background:var(--bg); color:var(--fg); font:15px/1.5 system-ui, sans-serif; margin:0 auto; max-width:860px; padding:24px; }
a { color:inherit; text-decoration:none; }
.status-line, .pill-row-label, .stat-label, .model-date, .model-desc { color:var(--muted); }
.stats { display:flex; gap:24px; margin:16px 0; }
.stat-num { font-size:22px; font-weight:700; }
.pill-row { margin:6px 0; }
.pill { border:1px solid var(--muted); border-radius:999px; padding:2px 10px; margin:0 4px; font-size:13px; }
.pill.active { background:var(--fg); color:var(--bg); }
.search input { width:100%; padding:8px 12px; margin:12px 0; border-radius:8px; border:1px solid var(--muted); background:var(--card); color:var(--fg); }
.model-card { display:flex; gap:14px; background:var(--card); border-left:3px solid var(--card-color); border-radius:10px; padding:14px; margin:10px 0; animation:rise .3s both; }
@keyframes rise { from { opacity:0; transform:translateY(6px); } }
.model-logo { width:42px; height:42px; border-radius:10px; display:flex; align-items:center; justify-content:center; font-size:22px; }
.model-name { font-weight:600; }
.model-note { color:#e0a33b; font-size:13px; margin-top:4px; }
.model-meta { margin-left:auto; text-align:right; white-space:nowrap; }
.tag { font-size:12px; border:1px solid var(--muted); border-radius:6px; padding:0 6px; margin-right:4px; }
.status-badge { display:inline-flex; align-items:center; gap:6px; font-size:13px; }
.s-dot { width:8px; height:8px; border-radius:50%; background:currentColor; }
.status-released { color:#4ade80; }
.status-imminent { color:#f97316; }
.status-upcoming { color:#60a5fa; }
.divider { color:var(--muted); text-transform:uppercase; font-size:12px; letter-spacing:.1em; margin:18px 0 8px; }
.empty, .loading { color:var(--muted); margin:32px 0; text-align:center; }
.toolbar { display:flex; align-items:center; gap:12px; }
button { background:var(--card); color:var(--fg); border:1px solid var(--muted); border-radius:8px; padding:6px 14px; cursor:pointer; }
.theme-btn.active { outline:2px solid var(--fg); }
footer { color:var(--muted); font-size:13px; margin-top:32px; }
"#;

/// Script wiring the two browser-side concerns: the persisted theme
/// preference and the refresh button.  Everything else is server-rendered.
fn page_script() -> String {
    format!(
        r#"
const THEME_KEY = '{THEME_STORAGE_KEY}';
function setTheme(name) {{
  document.documentElement.setAttribute('data-theme', name);
  document.querySelectorAll('.theme-btn').forEach(btn => {{
    btn.classList.toggle('active', btn.dataset.theme === name);
  }});
  localStorage.setItem(THEME_KEY, name);
}}
setTheme(localStorage.getItem(THEME_KEY) || '{default_theme}');

async function fetchLatest() {{
  const btn = document.getElementById('fetchBtn');
  btn.disabled = true;
  btn.textContent = 'Fetching…';
  try {{
    await fetch('/api/fetch-models', {{ method: 'POST' }});
  }} finally {{
    location.reload();
  }}
}}
"#,
        default_theme = Theme::default().as_str(),
    )
}

/// Render the complete catalog page: stats, pills, search, grouped cards and
/// chrome.  Pure function of its inputs.
pub fn render_page(records: &[ModelRecord], filters: &FilterSet, source: &CatalogSource) -> String {
    let visible = filters.visible(records);
    let stats = CatalogStats::of(records);

    let mut pills = String::new();
    let status_values: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();
    let lab_values: Vec<&str> = Lab::ALL.iter().map(|l| l.as_str()).collect();
    render_pill_group(&mut pills, filters, FilterDimension::Status, "Status", &status_values);
    render_pill_group(&mut pills, filters, FilterDimension::Lab, "Lab", &lab_values);
    render_pill_group(
        &mut pills,
        filters,
        FilterDimension::Capability,
        "Capability",
        &TAG_VOCABULARY,
    );

    let clear = if filters.is_active() {
        r#"<a class="pill" id="clearFilters" href="/">Clear filters</a>"#
    } else {
        ""
    };

    let body = if visible.is_empty() {
        r#"<div class="empty" id="emptyState">No models match the current filters.</div>"#.to_owned()
    } else {
        render_catalog(&visible)
    };

    let theme_buttons: String = Theme::ALL
        .iter()
        .map(|theme| {
            format!(
                r#"<button class="theme-btn" data-theme="{name}" onclick="setTheme('{name}')">{name}</button>"#,
                name = theme.as_str()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{default_theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>The Frontier</title>
<style>{STYLE}</style>
</head>
<body>
<header>
  <h1>The Frontier</h1>
  <div class="status-line" id="lastUpdated">{status_line}</div>
</header>
{stats}
<div class="toolbar">
  <button id="fetchBtn" onclick="fetchLatest()">Fetch latest</button>
  <span class="theme-picker">{theme_buttons}</span>
</div>
{search}
{pills}{clear}
<div class="status-line" id="resultsCount">{results}</div>
<main id="modelsList">
{body}</main>
<footer id="footerTimestamp">{status_line}</footer>
<script>{script}</script>
</body>
</html>
"#,
        default_theme = Theme::default().as_str(),
        status_line = escape_html(&source.status_line()),
        stats = render_stats(&stats),
        search = render_search_form(filters),
        results = results_count(visible.len()),
        script = page_script(),
    )
}
