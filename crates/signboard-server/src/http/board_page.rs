/// The board UI: one self-contained page, no external assets, driven by
/// the JSON API. Tablets render this full screen.
pub(crate) const BOARD_PAGE_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Operator Signup Board</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 0; background: #f4f6f8; color: #1f2d3d; }
  header { text-align: center; padding: 1.2rem 0 0.6rem; }
  header h1 { margin: 0; font-size: 1.9rem; color: #1f4e79; }
  main { max-width: 860px; margin: 0 auto; padding: 1rem; }
  .tiles { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 0.8rem; }
  button { font-size: 1.15rem; font-weight: 600; padding: 1rem; min-height: 64px;
           border-radius: 10px; border: 2px solid #d7dde3; background: #fff; cursor: pointer; }
  button:hover { border-color: #1f6fd6; }
  button.back { min-height: 44px; font-size: 0.95rem; font-weight: 500; }
  form { display: grid; gap: 0.7rem; margin-top: 1rem; }
  input, textarea { font-size: 1.1rem; padding: 0.7rem; border: 1px solid #c4ccd4; border-radius: 8px; }
  table { width: 100%; border-collapse: collapse; margin-top: 1rem; background: #fff; }
  th, td { text-align: left; padding: 0.55rem 0.7rem; border-bottom: 1px solid #e4e8ec; }
  .notice { padding: 0.8rem; border-radius: 8px; margin: 0.8rem 0; }
  .notice.ok { background: #e2f4e8; color: #19642e; }
  .notice.err { background: #fbe4e4; color: #8c1c1c; }
  h2 { font-size: 1.25rem; }
</style>
</head>
<body>
<header><h1>Operator Signup Board</h1></header>
<main id="app"></main>
<script>
"use strict";
const app = document.getElementById("app");
let clipboard = null;
let slotDate = null;

async function getJson(path) {
  const res = await fetch(path);
  if (!res.ok) throw new Error("request failed: " + res.status);
  return res.json();
}

function el(tag, attrs, text) {
  const node = document.createElement(tag);
  Object.assign(node, attrs || {});
  if (text !== undefined) node.textContent = text;
  return node;
}

async function showClipboards() {
  clipboard = null; slotDate = null;
  const data = await getJson("/v1/clipboards");
  app.replaceChildren(el("h2", {}, "Select a signup sheet"));
  const tiles = el("div", { className: "tiles" });
  for (const c of data.clipboards) {
    const b = el("button", {}, c.label + " Sign Up");
    b.onclick = () => showDates(c);
    tiles.appendChild(b);
  }
  app.appendChild(tiles);
}

async function showDates(c) {
  clipboard = c; slotDate = null;
  const data = await getJson("/v1/window");
  app.replaceChildren(el("h2", {}, "Select a date for " + c.label));
  const back = el("button", { className: "back" }, "← Back to sheets");
  back.onclick = showClipboards;
  app.appendChild(back);
  const tiles = el("div", { className: "tiles" });
  for (const d of data.dates) {
    const b = el("button", {}, d.label);
    b.onclick = () => showSlot(d);
    tiles.appendChild(b);
  }
  app.appendChild(tiles);
}

async function showSlot(d, notice) {
  slotDate = d;
  const data = await getJson("/v1/slots/" + clipboard.token + "/" + d.date);
  app.replaceChildren(el("h2", {}, clipboard.label + " - " + d.label));
  const back = el("button", { className: "back" }, "← Back to dates");
  back.onclick = () => showDates(clipboard);
  app.appendChild(back);

  if (notice) app.appendChild(notice);

  if (data.count === 0) {
    app.appendChild(el("p", {}, "No signups yet for this date."));
  } else {
    const table = el("table");
    const head = el("tr");
    for (const h of ["#", "Name", "ID", "Phone", "Notes", "Signed up"]) {
      head.appendChild(el("th", {}, h));
    }
    table.appendChild(head);
    data.signups.forEach((s, i) => {
      const row = el("tr");
      row.appendChild(el("td", {}, String(i + 1)));
      row.appendChild(el("td", {}, s.name));
      row.appendChild(el("td", {}, s.operator_id || ""));
      row.appendChild(el("td", {}, s.phone || ""));
      row.appendChild(el("td", {}, s.notes || ""));
      row.appendChild(el("td", {}, new Date(s.signed_up_at).toLocaleTimeString()));
      table.appendChild(row);
    });
    app.appendChild(table);
  }

  const form = el("form");
  const name = el("input", { placeholder: "Your name (required)", maxLength: 80 });
  const id = el("input", { placeholder: "Operator ID (optional)", maxLength: 16 });
  const phone = el("input", { placeholder: "Phone (optional)", maxLength: 32 });
  const notes = el("textarea", { placeholder: "Notes (optional)", rows: 2 });
  const submit = el("button", {}, "✅ Sign Me Up");
  form.append(name, id, phone, notes, submit);
  form.onsubmit = async (ev) => {
    ev.preventDefault();
    const body = { name: name.value };
    if (id.value) body.operator_id = id.value;
    if (phone.value) body.phone = phone.value;
    if (notes.value) body.notes = notes.value;
    const res = await fetch("/v1/slots/" + clipboard.token + "/" + d.date + "/signups", {
      method: "POST",
      headers: { "content-type": "application/json" },
      body: JSON.stringify(body),
    });
    if (res.status === 201) {
      showSlot(d, el("div", { className: "notice ok" }, "Your signup has been recorded."));
    } else {
      const err = await res.json().catch(() => null);
      const message = err && err.error ? err.error.message : "signup failed";
      showSlot(d, el("div", { className: "notice err" }, message));
    }
  };
  app.appendChild(form);
}

showClipboards().catch((e) => {
  app.replaceChildren(el("div", { className: "notice err" }, String(e)));
});
</script>
</body>
</html>
"##;
