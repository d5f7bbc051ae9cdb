//! CSS for the periodic table, injected once through `leptos_meta::Style`.

/// Grid, cell and tooltip styles.
///
/// The tooltip is hidden unless its inline style sets `opacity`; the `active`
/// class only makes it visible to layout.
pub const TABLE_CSS: &str = r#"
body {
	margin: 0;
	background: #141414;
	font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}

.root {
	position: relative;
	padding: 24px;
}

.grid {
	display: grid;
	grid-template-columns: repeat(18, minmax(0, 1fr));
	grid-template-rows: repeat(10, auto);
	gap: 6px;
}

.element {
	display: flex;
	flex-direction: column;
	justify-content: space-between;
	min-height: 64px;
	padding: 4px 6px;
	border-radius: 6px;
	color: #fff;
	cursor: default;
	transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.element:hover {
	transform: scale(1.08);
}

.element.placeholder {
	background: #3a3a3a;
	color: #bbb;
}

.element .header {
	font-size: 9px;
	white-space: nowrap;
	overflow: hidden;
	text-overflow: ellipsis;
}

.element .body {
	font-size: 20px;
	font-weight: 600;
	text-align: center;
}

.element .footer {
	font-size: 10px;
	text-align: right;
	opacity: 0.85;
}

.tooltip {
	position: absolute;
	top: 0;
	left: 0;
	opacity: 0;
	visibility: hidden;
	pointer-events: none;
	transition: transform 0.2s ease, opacity 0.2s ease;
}

.tooltip.active {
	visibility: visible;
}

.tooltip-card {
	display: grid;
	grid-template-columns: auto auto;
	gap: 2px 10px;
	min-width: 160px;
	padding: 10px 12px;
	border: 2px solid #555;
	border-radius: 8px;
	background: rgba(20, 20, 20, 0.92);
	color: #eee;
	font-size: 12px;
}

.tooltip-symbol {
	font-size: 22px;
	font-weight: 700;
}

.tooltip-name,
.tooltip-category {
	grid-column: 1 / -1;
}

.load-error {
	margin: 48px auto;
	max-width: 640px;
	padding: 16px;
	border: 1px solid #cf1322;
	border-radius: 6px;
	color: #ffa39e;
	font-family: monospace;
}
"#;
