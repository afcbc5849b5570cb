//! HTML rendering for the table page.

use zoneboard_service::error::StoreError;
use zoneboard_service::store::RecordRow;

/// Submitted add-form values, retained across a rejected submission so the
/// user can correct the input.
#[derive(Debug, Default)]
pub struct FormState {
    pub label: String,
    pub timezone: String,
}

/// ## Summary
/// Renders the full page: the record table and the add form.
///
/// The table has Label, Timezone, and Current Time columns plus a delete
/// control per row, disabled for the local record. A rejected submission is
/// re-rendered with the validation message and the submitted values kept in
/// the still-open form; no row is added for it.
#[must_use]
pub fn render_page(
    rows: &[RecordRow],
    offered: &[String],
    form: &FormState,
    error: Option<&StoreError>,
) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head><meta charset=\"utf-8\"><title>Zoneboard</title></head>\n",
        "<body>\n",
        "<h1>Zoneboard</h1>\n",
        "<p><a href=\"/?sort=time\">Sort by time</a> | <a href=\"/\">Insertion order</a></p>\n",
    ));

    html.push_str(
        "<table>\n<thead><tr><th>Label</th><th>Timezone</th><th>Current Time</th><th></th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", escape_html(&row.label)));
        html.push_str(&format!("<td>{}</td>", escape_html(&row.timezone_id)));
        html.push_str(&format!("<td>{}</td>", escape_html(&row.current_time)));
        if row.is_local {
            // The local record is protected; its control is rendered but inert.
            html.push_str("<td><button type=\"button\" disabled>Delete</button></td>");
        } else {
            html.push_str(&format!(
                concat!(
                    "<td><form method=\"post\" action=\"/records/delete\">",
                    "<input type=\"hidden\" name=\"label\" value=\"{}\">",
                    "<button type=\"submit\">Delete</button></form></td>",
                ),
                escape_html(&row.label)
            ));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    if let Some(err) = error {
        html.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(&err.to_string())
        ));
    }

    html.push_str("<form method=\"post\" action=\"/records\">\n");
    html.push_str(&format!(
        "<input type=\"text\" name=\"label\" placeholder=\"Label\" value=\"{}\">\n",
        escape_html(&form.label)
    ));
    html.push_str("<select name=\"timezone\">\n<option value=\"\"></option>\n");
    for id in offered {
        let selected = if *id == form.timezone { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape_html(id),
            selected
        ));
    }
    html.push_str("</select>\n<button type=\"submit\">Save</button>\n</form>\n");

    html.push_str("</body>\n</html>\n");

    html
}

/// Escapes text for safe interpolation into element and attribute content.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
