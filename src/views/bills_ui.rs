//! Bill list page and receipt preview modal

use crate::containers::bills::DisplayBill;
use crate::views::{encode_query_value, escape, layout};

/// Render the employee bill list
///
/// Rows are emitted in the order given; `BillsContainer::get_bills`
/// already sorted them by descending date.
pub fn bills_ui(bills: &[DisplayBill]) -> String {
    let rows: String = bills
        .iter()
        .map(|bill| {
            format!(
                r#"        <tr>
          <td>{bill_type}</td>
          <td>{name}</td>
          <td>{date}</td>
          <td>{amount} €</td>
          <td>{status}</td>
          <td>
            <a href="/bills/receipt?url={query_url}" data-testid="icon-eye" data-bill-url="{url}">Voir</a>
          </td>
        </tr>
"#,
                bill_type = escape(&bill.bill_type),
                name = escape(&bill.name),
                date = escape(&bill.date),
                amount = bill.amount,
                status = escape(bill.status),
                query_url = encode_query_value(&bill.file_url),
                url = escape(&bill.file_url),
            )
        })
        .collect();

    let content = format!(
        r#"    <div class="content-header">
      <h1 data-testid="content-title">Mes notes de frais</h1>
      <a href="/bills/new" data-testid="btn-new-bill">Nouvelle note de frais</a>
    </div>
    <table id="data-table">
      <thead>
        <tr>
          <th>Type</th>
          <th>Nom</th>
          <th>Date</th>
          <th>Montant</th>
          <th>Statut</th>
          <th>Actions</th>
        </tr>
      </thead>
      <tbody data-testid="tbody">
{rows}      </tbody>
    </table>"#,
        rows = rows
    );

    layout("Billed - Mes notes de frais", &content)
}

/// Render the receipt preview modal for a stored file URL
pub fn receipt_modal(file_url: &str) -> String {
    format!(
        r#"<div class="modal" id="modaleFile" data-testid="modale-file">
  <div class="modal-header">
    <h5>Justificatif</h5>
  </div>
  <div class="modal-body">
    <img src="{url}" alt="Bill" width="100%">
  </div>
</div>"#,
        url = escape(file_url)
    )
}
