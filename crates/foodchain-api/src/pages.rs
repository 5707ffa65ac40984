//! HTML pages.
//!
//! Every page shares [`layout`]. Text that came from a user or the catalog
//! goes through [`escape_html`] before it is interpolated.

use foodchain_core::Catalog;
use foodchain_storage::UserSummary;

/// Message shown on the login page after a failed attempt.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

const TITLE: &str = "Visualization of Food Chain";

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; background-color: #f0f9f0; margin: 0; padding: 0; }
    header { background: #2e7d32; color: white; padding: 20px; text-align: center; }
    main { padding: 20px; max-width: 900px; margin: auto; }
    .form-box { background: #e8f5e9; padding: 20px; border-radius: 10px; }
    .error { color: #b71c1c; font-weight: bold; }
    input, button, select { padding: 10px; margin: 5px 0; width: 100%; }
    button { background-color: #4caf50; color: white; border: none; }
    button:hover { background-color: #388e3c; cursor: pointer; }
    .species-box { background: white; border-left: 5px solid #388e3c; padding: 10px; margin: 10px;
                   border-radius: 5px; display: inline-block; min-width: 120px; text-align: center; }
    .arrow { display: inline-block; font-size: 24px; margin: 0 10px; }
"#;

const HTML2CANVAS_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/html2canvas/1.4.1/html2canvas.min.js";
const JSPDF_SRC: &str = "https://cdnjs.cloudflare.com/ajax/libs/jspdf/2.5.1/jspdf.umd.min.js";

/// Renders the food chain of the selected ecosystem and exports it as PNG or PDF.
const VISUALIZATION_SCRIPT: &str = r#"
  const select = document.getElementById('ecosystem-select');
  const container = document.getElementById('food-chain-container');

  function speciesBox(item) {
    const box = document.createElement('div');
    box.className = 'species-box';
    const name = document.createElement('b');
    name.textContent = item.name;
    const role = document.createElement('em');
    role.textContent = item.role;
    box.append(name, document.createElement('br'), role);
    return box;
  }

  function renderChain(name) {
    container.replaceChildren();
    const entry = ECOSYSTEMS[name];
    const chain = entry ? entry.chain : [];
    chain.forEach((item, i) => {
      container.appendChild(speciesBox(item));
      if (i < chain.length - 1) {
        const arrow = document.createElement('span');
        arrow.className = 'arrow';
        arrow.textContent = '→';
        container.appendChild(arrow);
      }
    });
  }

  async function exportAsPDF() {
    const { jsPDF } = window.jspdf;
    const canvas = await html2canvas(container);
    const pdf = new jsPDF();
    pdf.addImage(canvas.toDataURL('image/png'), 'PNG', 10, 10, 180, 60);
    pdf.save('food_chain.pdf');
  }

  async function exportAsImage() {
    const canvas = await html2canvas(container);
    const link = document.createElement('a');
    link.download = 'food_chain.png';
    link.href = canvas.toDataURL();
    link.click();
  }

  select.addEventListener('change', () => renderChain(select.value));
  document.getElementById('export-pdf').addEventListener('click', exportAsPDF);
  document.getElementById('export-image').addEventListener('click', exportAsImage);
  window.addEventListener('load', () => renderChain(select.value));
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `content` in the shared page shell.
pub fn layout(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{TITLE}</title>
  <style>{STYLE}</style>
</head>
<body>
  <header><h1>{TITLE}</h1></header>
  <main>
{content}
  </main>
</body>
</html>
"#
    )
}

/// The welcome page with the registration form.
pub fn welcome_page() -> String {
    layout(
        r#"    <div class="form-box">
      <h2>Register to Explore Food Chains</h2>
      <form method="POST" action="/register">
        <input type="text" name="name" placeholder="Your Name" required>
        <input type="email" name="email" placeholder="Email" required>
        <input type="password" name="password" placeholder="Password" required>
        <button type="submit">Register</button>
      </form>
      <p>Already registered? <a href="/login">Login here</a></p>
    </div>"#,
    )
}

/// The login form, optionally with an inline error message.
pub fn login_page(error: Option<&str>) -> String {
    let error = error
        .map(|msg| format!(r#"      <p class="error">{}</p>"#, escape_html(msg)))
        .unwrap_or_default();
    layout(&format!(
        r#"    <div class="form-box">
      <h2>Login</h2>
{error}
      <form method="POST" action="/login">
        <input type="email" name="email" placeholder="Email" required>
        <input type="password" name="password" placeholder="Password" required>
        <button type="submit">Login</button>
      </form>
      <p>New here? <a href="/">Register</a></p>
    </div>"#
    ))
}

/// The gated visualization page for `user_name`.
pub fn visualization_page(user_name: &str, catalog: &Catalog) -> String {
    let options: String = catalog
        .list_ecosystem_names()
        .into_iter()
        .map(|name| {
            let name = escape_html(name);
            format!(r#"<option value="{name}">{name}</option>"#)
        })
        .collect();
    let data = script_json(&catalog.to_json());
    let user_name = escape_html(user_name);

    layout(&format!(
        r#"    <h2>Welcome, {user_name}!</h2>
    <p>Select an ecosystem to visualize its food chain:</p>
    <select id="ecosystem-select">{options}</select>
    <div id="food-chain-container"></div>
    <button id="export-pdf">Export as PDF</button>
    <button id="export-image">Export as Image</button>
    <p><a href="/logout">Log out</a></p>

    <script src="{HTML2CANVAS_SRC}"></script>
    <script src="{JSPDF_SRC}"></script>
    <script>
  const ECOSYSTEMS = {data};
{VISUALIZATION_SCRIPT}
    </script>"#
    ))
}

/// The admin listing of registered users.
pub fn admin_page(users: &[UserSummary]) -> String {
    let items: String = users
        .iter()
        .map(|u| {
            format!(
                "        <li><b>{}</b> ({})</li>\n",
                escape_html(&u.name),
                escape_html(&u.email)
            )
        })
        .collect();
    layout(&format!(
        r#"    <h2>Admin Panel - Registered Users</h2>
    <ul>
{items}    </ul>"#
    ))
}

/// Generic failure page; never carries error details.
pub fn error_page() -> String {
    layout(
        r#"    <h2>Something went wrong</h2>
    <p>The request could not be completed. <a href="/">Return home</a></p>"#,
    )
}

/// Serialize JSON for embedding inside a `<script>` element.
fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}
