//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary and filled by plain `{{KEY}}`
//! substitution. Every substituted value is HTML-escaped.

use crate::models::event_kind::EventKind;
use crate::models::locale::Locale;
use crate::models::site::Site;
use crate::models::status::StatusScope;

const TERMINAL_TEMPLATE: &str = include_str!("templates/terminal.html");
const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Single pass over the template: substituted values are never rescanned,
/// and unknown `{{KEY}}` markers are kept as they are.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];

        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };

        let key = &after[..close];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[close + 2..];
    }

    out.push_str(rest);
    out
}

fn lang(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::Sk => "sk",
    }
}

/// One button per event kind, posting its wire key.
fn kind_buttons(locale: Locale) -> String {
    EventKind::ALL
        .iter()
        .map(|k| {
            format!(
                r#"    <button type="button" data-kind="{}">{}</button>"#,
                k.wire_key(),
                escape_html(k.label(locale))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn terminal_page(site: &Site, locale: Locale) -> String {
    let (title, prompt) = match locale {
        Locale::En => ("Attendance terminal", "Enter your personnel code:"),
        Locale::Sk => ("Dochádzkový terminál", "Zadajte osobné číslo:"),
    };

    fill(
        TERMINAL_TEMPLATE,
        &[
            ("LANG", lang(locale).to_string()),
            ("TITLE", title.to_string()),
            ("PROMPT", prompt.to_string()),
            ("SITE_NAME", escape_html(&site.name)),
            ("SITE_CODE", escape_html(&site.code)),
            ("BUTTONS", kind_buttons(locale)),
        ],
    )
}

pub fn report_page(locale: Locale, default_scope: StatusScope) -> String {
    let (title, from, to, scope, download, today) = match locale {
        Locale::En => (
            "Attendance report",
            "From",
            "To",
            "Status",
            "Download CSV",
            "Today's report",
        ),
        Locale::Sk => (
            "Report dochádzky",
            "Od",
            "Do",
            "Stav",
            "Stiahnuť CSV",
            "Dnešný report",
        ),
    };

    let selected = |s: StatusScope| {
        if s == default_scope {
            " selected".to_string()
        } else {
            String::new()
        }
    };

    fill(
        REPORT_TEMPLATE,
        &[
            ("LANG", lang(locale).to_string()),
            ("TITLE", title.to_string()),
            ("FROM", from.to_string()),
            ("TO", to.to_string()),
            ("SCOPE", scope.to_string()),
            ("DOWNLOAD", download.to_string()),
            ("TODAY", today.to_string()),
            ("WINDOW_SELECTED", selected(StatusScope::Window)),
            ("GLOBAL_SELECTED", selected(StatusScope::Global)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_page_escapes_site_name_and_lists_all_kinds() {
        let site = Site {
            id: 1,
            code: "NM01".into(),
            name: "<Centrala & Co>".into(),
        };
        let page = terminal_page(&site, Locale::En);

        assert!(page.contains("&lt;Centrala &amp; Co&gt;"));
        assert!(page.contains(r#"const SITE_CODE = "NM01";"#));
        for k in EventKind::ALL {
            assert!(page.contains(&format!(r#"data-kind="{}""#, k.wire_key())));
        }
        assert!(!page.contains("{{"));
    }

    #[test]
    fn placeholders_inside_site_names_are_not_expanded() {
        let site = Site {
            id: 2,
            code: "TN01".into(),
            name: "Servis {{BUTTONS}} {{SITE_CODE}}".into(),
        };
        let page = terminal_page(&site, Locale::En);

        assert!(page.contains("<h1>Servis {{BUTTONS}} {{SITE_CODE}}</h1>"));
        assert_eq!(page.matches("data-kind=").count(), EventKind::ALL.len());
    }

    #[test]
    fn fill_keeps_unknown_and_unterminated_markers() {
        let values = [("A", "x".to_string())];
        assert_eq!(fill("{{A}}-{{B}}-{{A", &values), "x-{{B}}-{{A");
    }

    #[test]
    fn report_page_preselects_default_scope() {
        let page = report_page(Locale::Sk, StatusScope::Global);
        assert!(page.contains(r#"value="global" selected"#));
        assert!(page.contains("Report dochádzky"));
        assert!(!page.contains("{{"));
    }
}
