//! Shared page chrome: layout, login and error pages

use crate::views::escape;

/// Wrap page content into the common document skeleton
///
/// The vertical navigation carries the `icon-window` (bill list) and
/// `icon-mail` (new bill) entries present on every employee page.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <nav class="vertical-navbar">
    <a href="/bills" data-testid="icon-window">Mes notes de frais</a>
    <a href="/bills/new" data-testid="icon-mail">Nouvelle note de frais</a>
  </nav>
  <main>
{content}
  </main>
</body>
</html>"#,
        title = escape(title),
        content = content,
    )
}

/// Login page shown at the application root
pub fn login_page() -> String {
    let content = r#"    <div class="form-employee-container">
      <h2>Employé</h2>
      <form method="post" action="/login" data-testid="form-employee">
        <label for="employee-email">Email</label>
        <input type="email" id="employee-email" name="email" data-testid="employee-email-input" required>
        <label for="employee-password">Mot de passe</label>
        <input type="password" id="employee-password" name="password" data-testid="employee-password-input" required>
        <button type="submit" data-testid="employee-login-button">Se connecter</button>
      </form>
    </div>"#;
    layout("Billed - Connexion", content)
}

/// Error page containing the failure message verbatim
///
/// The bill-list fetch path relies on the message text ("Erreur 404",
/// "Erreur 500") being visible on this page.
pub fn error_page(message: &str) -> String {
    let content = format!(
        r#"    <div class="error-page">
      <h1>Erreur</h1>
      <p data-testid="error-message">{}</p>
    </div>"#,
        escape(message)
    );
    layout("Billed - Erreur", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page_shows_message_verbatim() {
        let page = error_page("Erreur 404");
        assert!(page.contains("Erreur 404"));
        assert!(page.contains("data-testid=\"error-message\""));

        let page = error_page("Erreur 500");
        assert!(page.contains("Erreur 500"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page("<b>bad</b>");
        assert!(!page.contains("<b>bad</b>"));
        assert!(page.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn test_login_page_hooks() {
        let page = login_page();
        assert!(page.contains("data-testid=\"form-employee\""));
        assert!(page.contains("data-testid=\"employee-email-input\""));
        assert!(page.contains("data-testid=\"employee-password-input\""));
    }

    #[test]
    fn test_layout_navigation_hooks() {
        let page = layout("t", "c");
        assert!(page.contains("data-testid=\"icon-window\""));
        assert!(page.contains("data-testid=\"icon-mail\""));
    }
}
