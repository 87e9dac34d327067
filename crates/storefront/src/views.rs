//! Server-rendered HTML pages.
//!
//! Every interpolated value goes through [`escape`]; product names and error
//! messages come from another process and are not trusted as markup.

use std::fmt::Write as _;

use foodstore_inventory::{OrderReceipt, ProductView};

use crate::client::ClientError;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:42rem;margin:2rem auto;padding:0 1rem;color:#222}\
nav a{margin-right:1rem}\
table{border-collapse:collapse;width:100%}\
th,td{text-align:left;padding:.4rem;border-bottom:1px solid #ddd}\
.error{border-left:4px solid #c0392b;padding:.5rem 1rem;background:#fdecea}\
.ok{border-left:4px solid #27ae60;padding:.5rem 1rem;background:#eafaf1}\
.muted{color:#777}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} · Food Store</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Order</a><a href=\"/inventory\">Inventory</a></nav>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// Order form: product select with live price/stock, and a quantity input.
pub fn order_form(products: &[ProductView]) -> String {
    let mut options = String::new();
    for p in products {
        let label = if p.in_stock {
            escape(&p.display_name)
        } else {
            format!("{} (out of stock)", escape(&p.display_name))
        };
        let _ = writeln!(
            options,
            "<option value=\"{value}\" data-price=\"{price}\" data-stock=\"{stock}\" data-units=\"{units}\">{label}</option>",
            value = escape(&p.name),
            price = p.price,
            stock = p.stock,
            units = escape(&p.units),
        );
    }

    let body = if products.is_empty() {
        "<p class=\"muted\">No products are available right now.</p>".to_string()
    } else {
        format!(
            "<form method=\"post\" action=\"/\">\n\
             <p><label for=\"product\">Product</label>\n\
             <select id=\"product\" name=\"product\">\n{options}</select></p>\n\
             <p>Price: <strong id=\"price\"></strong> · In stock: <strong id=\"stock\"></strong> <span id=\"units\"></span></p>\n\
             <p><label for=\"order_qty\">Quantity</label>\n\
             <input id=\"order_qty\" name=\"order_qty\" type=\"number\" min=\"1\" value=\"1\" required></p>\n\
             <p><button type=\"submit\">Place order</button></p>\n\
             </form>\n\
             <script>\n\
             const sel = document.getElementById('product');\n\
             function show() {{\n\
               const o = sel.options[sel.selectedIndex];\n\
               document.getElementById('price').textContent = o.dataset.price;\n\
               document.getElementById('stock').textContent = o.dataset.stock;\n\
               document.getElementById('units').textContent = o.dataset.units;\n\
             }}\n\
             sel.addEventListener('change', show);\n\
             show();\n\
             </script>"
        )
    };

    layout("Place an order", &body)
}

pub fn confirmation(receipt: &OrderReceipt) -> String {
    let body = format!(
        "<div class=\"ok\"><p>{message}</p></div>\n\
         <table>\n\
         <tr><th>Product</th><td>{name}</td></tr>\n\
         <tr><th>Quantity</th><td>{qty} {units}</td></tr>\n\
         <tr><th>Unit price</th><td>{price}</td></tr>\n\
         <tr><th>Total</th><td><strong>{total}</strong></td></tr>\n\
         <tr><th>Remaining stock</th><td>{remaining}</td></tr>\n\
         </table>\n\
         <p><a href=\"/\">Place another order</a></p>",
        message = escape(&receipt.message),
        name = escape(&receipt.product_name),
        qty = receipt.quantity,
        units = escape(&receipt.units),
        price = receipt.price,
        total = receipt.total,
        remaining = receipt.remaining_stock,
    );
    layout("Order confirmed", &body)
}

pub fn error_page(err: &ClientError) -> String {
    let mut body = format!(
        "<div class=\"error\"><p>{}</p></div>\n",
        escape(&err.to_string())
    );
    if let ClientError::InsufficientStock {
        requested: Some(requested),
        available: Some(available),
        ..
    } = err
    {
        let _ = writeln!(
            body,
            "<p>Requested <strong>{requested}</strong>, available <strong>{available}</strong>.</p>"
        );
    }
    body.push_str("<p><a href=\"/\">Back to the order form</a></p>");
    layout(err.title(), &body)
}

pub fn inventory(products: &[ProductView]) -> String {
    let mut rows = String::new();
    for p in products {
        let _ = writeln!(
            rows,
            "<tr><td>{name}</td><td>{display}</td><td>{price}</td><td>{stock} {units}</td></tr>",
            name = escape(&p.name),
            display = escape(&p.display_name),
            price = p.price,
            stock = p.stock,
            units = escape(&p.units),
        );
    }

    let body = format!(
        "<table>\n<thead><tr><th>Key</th><th>Product</th><th>Price</th><th>Stock</th></tr></thead>\n\
         <tbody>\n{rows}</tbody>\n</table>"
    );
    layout("Inventory", &body)
}
