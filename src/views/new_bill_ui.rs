//! New bill form page

use crate::core::bill::EXPENSE_TYPES;
use crate::views::{escape, layout};

/// Render state of the new-bill form
///
/// `attached_file` is the name of a successfully uploaded receipt;
/// `file_error` is the French message shown when the last selected file
/// was rejected; `form_error` carries a submit-time validation message.
/// All empty on first render.
#[derive(Debug, Clone, Default)]
pub struct NewBillViewModel {
    pub attached_file: Option<String>,
    pub file_error: Option<String>,
    pub form_error: Option<String>,
}

/// Render the new-bill form
pub fn new_bill_ui(model: &NewBillViewModel) -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|t| format!("          <option value=\"{0}\">{0}</option>\n", escape(t)))
        .collect();

    let file_state = match (&model.file_error, &model.attached_file) {
        (Some(error), _) => format!(
            "        <p class=\"file-error\" data-testid=\"file-error\">{}</p>\n",
            escape(error)
        ),
        (None, Some(name)) => format!(
            "        <p class=\"file-attached\" data-testid=\"file-attached\">{}</p>\n",
            escape(name)
        ),
        (None, None) => String::new(),
    };

    let form_error = match &model.form_error {
        Some(error) => format!(
            "    <p class=\"form-error\" data-testid=\"form-error\">{}</p>\n",
            escape(error)
        ),
        None => String::new(),
    };

    let content = format!(
        r#"    <h1 data-testid="content-title">Envoyer une note de frais</h1>
{form_error}    <form method="post" action="/bills/new/file" enctype="multipart/form-data" data-testid="form-file">
      <label for="file">Justificatif</label>
      <input type="file" id="file" name="file" data-testid="file" accept=".jpg,.jpeg,.png">
{file_state}      <button type="submit">Joindre</button>
    </form>
    <form method="post" action="/bills/new" data-testid="form-new-bill">
      <label for="expense-type">Type de dépense</label>
      <select id="expense-type" name="expense_type" data-testid="expense-type">
{options}      </select>
      <label for="expense-name">Nom de la dépense</label>
      <input type="text" id="expense-name" name="expense_name" data-testid="expense-name" placeholder="Vol Paris Londres">
      <label for="datepicker">Date</label>
      <input type="date" id="datepicker" name="date" data-testid="datepicker">
      <label for="amount">Montant TTC</label>
      <input type="number" id="amount" name="amount" data-testid="amount" placeholder="348">
      <label for="vat">TVA</label>
      <input type="number" id="vat" name="vat" data-testid="vat" placeholder="70">
      <input type="number" id="pct" name="pct" data-testid="pct" placeholder="20">
      <label for="commentary">Commentaire</label>
      <textarea id="commentary" name="commentary" data-testid="commentary" rows="3"></textarea>
      <button type="submit" id="btn-send-bill">Envoyer</button>
    </form>"#,
        file_state = file_state,
        options = options,
    );

    layout("Billed - Envoyer une note de frais", &content)
}
