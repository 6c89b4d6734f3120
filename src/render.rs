use crate::config::SiteConfig;
use crate::debounce::SEARCH_DEBOUNCE;
use crate::models::query::{ListQuery, ALL_CATEGORIES};
use crate::models::template::Template;
use crate::pipeline::{ListingStatus, PageSlice};
use crate::view::HtmlSurface;

pub const MSG_LOAD_FAILED: &str = "Sorry, the templates could not be loaded. Please try again later.";
pub const MSG_NO_MATCH: &str = "No templates match your search.";
pub const MSG_NOT_FOUND: &str = "Template not found.";

/// Wraps page content in the site chrome. `head` carries the page's meta
/// tags (at minimum a `<title>`).
pub fn render_layout(config: &SiteConfig, head: &str, body: &str, scripts: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
{head}
    <link rel="stylesheet" href="/assets/css/site.css">
</head>
<body>
    <header class="site-header">
        <a href="/" class="site-name">{site_name}</a>
        <nav class="site-nav">
            <a href="/">Templates</a>
            <a href="/contact">Contact</a>
        </nav>
    </header>
    <main class="content">
{body}
    </main>
    <footer class="site-footer">
        <p>&copy; {year} {site_name}</p>
    </footer>
{scripts}
</body>
</html>"#,
        head = head,
        site_name = html_escape(&config.site_name),
        body = body,
        year = chrono::Utc::now().format("%Y"),
        scripts = scripts,
    )
}

/// Head for pages that carry no page-specific metadata.
pub fn default_head(config: &SiteConfig) -> String {
    format!("    <title>{}</title>", html_escape(&config.site_name))
}

// ── List ───────────────────────────────────────────────

pub fn render_list_page(
    config: &SiteConfig,
    query: &ListQuery,
    categories: &[String],
    surface: &HtmlSurface,
) -> String {
    let mut options = String::new();
    options.push_str(&category_option(ALL_CATEGORIES, "All categories", &query.category));
    for cat in categories {
        options.push_str(&category_option(cat, cat, &query.category));
    }

    let body = format!(
        r#"        <form id="filterForm" class="filter-bar" action="/" method="get" role="search">
            <select id="categoryFilter" name="category" aria-label="Category">{options}</select>
            <input id="searchInput" type="search" name="q" value="{search}" placeholder="Search templates" aria-label="Search templates">
            <button type="submit">Search</button>
        </form>
        <div id="loadingSpinner" class="spinner" hidden>Loading…</div>
        <div id="templateGrid" class="template-grid">{grid}</div>
        <nav id="paginationNav" aria-label="Pages"><div id="pagination">{pagination}</div></nav>
        <dialog id="demoModal" class="demo-modal">
            <button type="button" class="demo-close" aria-label="Close demo">&times;</button>
            <iframe id="demoIframe" title="Template demo" src="about:blank"></iframe>
        </dialog>"#,
        options = options,
        search = html_escape(&query.search),
        grid = surface.grid,
        pagination = surface.pagination,
    );

    let scripts = format!(
        "<script>\n{}\n{}\n</script>",
        live_search_script(),
        DEMO_MODAL_SCRIPT
    );

    render_layout(config, &default_head(config), &body, &scripts)
}

fn category_option(value: &str, label: &str, selected: &str) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if value == selected { " selected" } else { "" },
        html_escape(label)
    )
}

/// The card grid, or the message explaining why it is empty.
pub fn render_grid(slice: &PageSlice<'_>) -> String {
    match slice.status {
        ListingStatus::Unavailable => alert(MSG_LOAD_FAILED),
        ListingStatus::NoMatch => alert(MSG_NO_MATCH),
        ListingStatus::Found => slice.items.iter().map(|t| render_card(t)).collect(),
    }
}

pub fn render_card(t: &Template) -> String {
    let name = html_escape(&t.name);
    format!(
        r#"<article class="template-card">
    <img src="/assets/{image}" alt="{name} - responsive website template" loading="lazy">
    <div class="card-body">
        <h5 class="card-title">{name}</h5>
        <p class="price">{price}</p>
        <a href="{detail}" class="btn btn-primary" aria-label="View details of {name}">View details</a>
        <button type="button" class="btn btn-outline" data-demo="{demo}" aria-label="View demo of {name}">View demo</button>
    </div>
</article>
"#,
        image = html_escape(&t.image),
        name = name,
        price = html_escape(&t.price),
        detail = html_escape(&t.detail_path()),
        demo = html_escape(&t.demo),
    )
}

/// One control per page, `1..=total`, with the current page marked.
/// Nothing at all when there are no pages.
pub fn build_pagination(query: &ListQuery, total: usize) -> String {
    if total == 0 {
        return String::new();
    }
    let mut html = String::from(r#"<ul class="pagination">"#);
    for p in 1..=total {
        let current = p == query.page;
        html.push_str(&format!(
            r#"<li class="page-item{active}"><a class="page-link" href="{href}" data-page="{p}" aria-label="Page {p}"{aria}>{p}</a></li>"#,
            active = if current { " active" } else { "" },
            href = html_escape(&query.href_for_page(p)),
            p = p,
            aria = if current { r#" aria-current="page""# } else { "" },
        ));
    }
    html.push_str("</ul>");
    html
}

// ── Detail ─────────────────────────────────────────────

pub fn render_detail_body(t: &Template) -> String {
    let name = html_escape(&t.name);
    format!(
        r#"        <section id="templateDetail" class="template-detail">
            <div class="detail-image">
                <img src="/assets/{image}" alt="{name} - responsive website template" loading="lazy">
            </div>
            <div class="detail-info">
                <h2>{name}</h2>
                <p class="price">{price}</p>
                <p>{description}</p>
                <a href="{demo}" target="_blank" rel="noopener" class="btn btn-primary" aria-label="View demo of {name}">View demo</a>
            </div>
        </section>
        <section class="checkout">
            <h3>Order this template</h3>
            <form id="checkoutForm" action="/detail/checkout?id={id}" method="post">
                <input type="text" name="name" placeholder="Your name" required>
                <input type="email" name="email" placeholder="Your email" required>
                <textarea name="notes" placeholder="Notes"></textarea>
                <button type="submit" class="btn btn-primary">Order via WhatsApp</button>
            </form>
        </section>"#,
        image = html_escape(&t.image),
        name = name,
        price = html_escape(&t.price),
        description = html_escape(&t.description),
        demo = html_escape(&t.demo),
        id = html_escape(&urlencode(&t.id.to_string())),
    )
}

pub fn render_not_found_body() -> String {
    format!(
        "        <section id=\"templateDetail\" class=\"template-detail\">{}</section>",
        alert(MSG_NOT_FOUND)
    )
}

// ── Contact ────────────────────────────────────────────

pub fn render_contact_page(config: &SiteConfig) -> String {
    let head = format!(
        "    <title>Contact - {}</title>\n    <link rel=\"canonical\" href=\"{}\">",
        html_escape(&config.site_name),
        html_escape(&config.canonical("/contact")),
    );
    let body = r#"        <section class="contact">
            <h2>Contact us</h2>
            <form id="contactForm" action="/contact" method="post">
                <input type="text" name="name" placeholder="Your name" required>
                <input type="email" name="email" placeholder="Your email" required>
                <textarea name="message" placeholder="Your message" required></textarea>
                <button type="submit" class="btn btn-primary">Send via WhatsApp</button>
            </form>
        </section>"#;
    render_layout(config, &head, body, "")
}

// ── Errors ─────────────────────────────────────────────

pub fn render_error_page(config: &SiteConfig, code: u16, message: &str) -> String {
    let body = format!(
        r#"        <div class="error-page">
            <h1>{}</h1>
            <p>{}</p>
            <a href="/">&larr; Back to templates</a>
        </div>"#,
        code,
        html_escape(message)
    );
    render_layout(config, &default_head(config), &body, "")
}

// ── Helpers ────────────────────────────────────────────

fn alert(message: &str) -> String {
    format!(r#"<p class="text-center" role="alert">{}</p>"#, html_escape(message))
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn urlencode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

fn live_search_script() -> String {
    LIVE_SEARCH_SCRIPT.replace("{{debounce_ms}}", &SEARCH_DEBOUNCE.as_millis().to_string())
}

// Progressive enhancement for the filter form. Every request carries both
// controls' current values. Responses are tagged with a sequence number and
// only the newest one is painted.
const LIVE_SEARCH_SCRIPT: &str = r#"(function () {
  var form = document.getElementById('filterForm');
  if (!form || !window.fetch) return;
  var select = document.getElementById('categoryFilter');
  var input = document.getElementById('searchInput');
  var grid = document.getElementById('templateGrid');
  var pager = document.getElementById('pagination');
  var spinner = document.getElementById('loadingSpinner');
  var seq = 0;
  var timer = null;

  function load(params) {
    var mine = ++seq;
    spinner.hidden = false;
    fetch('/api/templates?' + new URLSearchParams(params).toString(), { credentials: 'same-origin' })
      .then(function (r) { return r.json(); })
      .then(function (data) {
        if (mine !== seq) return;
        grid.innerHTML = data.grid;
        pager.innerHTML = data.pagination;
      })
      .catch(function (err) { console.error('Error loading templates:', err); })
      .then(function () { if (mine === seq) spinner.hidden = true; });
  }

  form.addEventListener('submit', function (e) {
    e.preventDefault();
    clearTimeout(timer);
    load({ category: select.value, q: input.value });
  });
  select.addEventListener('change', function () {
    clearTimeout(timer);
    load({ category: select.value, q: input.value });
  });
  input.addEventListener('input', function () {
    clearTimeout(timer);
    timer = setTimeout(function () { load({ category: select.value, q: input.value }); }, {{debounce_ms}});
  });
  pager.addEventListener('click', function (e) {
    var link = e.target.closest('a[data-page]');
    if (!link) return;
    e.preventDefault();
    load({ category: select.value, q: input.value, page: link.getAttribute('data-page') });
  });
})();"#;

const DEMO_MODAL_SCRIPT: &str = r#"(function () {
  var modal = document.getElementById('demoModal');
  var frame = document.getElementById('demoIframe');
  if (!modal || !frame) return;
  document.addEventListener('click', function (e) {
    var btn = e.target.closest('[data-demo]');
    if (btn) {
      frame.src = btn.getAttribute('data-demo');
      if (modal.showModal) modal.showModal();
      return;
    }
    if (e.target.closest('.demo-close')) {
      frame.src = 'about:blank';
      modal.close();
    }
  });
})();"#;
