/// DOM contract between the page markup and the WASM shell.
///
/// Ids and classes must match `index.html`; the stylesheet owns the actual
/// transitions, the shell only toggles classes.
pub const CANVAS_ID: &str = "sky-canvas";
pub const WRITING_ID: &str = "writing-container";
pub const WRITING_HIDDEN_CLASS: &str = "writing-hidden";
pub const STRAP_ID: &str = "strap";
pub const STRAP_SHOWN_CLASS: &str = "show-strap";
pub const MESSAGE_IDS: [&str; 2] = ["message-1", "message-2"];
pub const SHEET_ID: &str = "sheet";
pub const SHEET_START_CLASS: &str = "sheet-start";
pub const SHEET_CONTENT_ID: &str = "sheet-content";
pub const VISIBLE_CLASS: &str = "visible";

// Canvas cursors for the pan gesture
pub const CURSOR_GRABBING: &str = "grabbing";
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_OUTSIDE: &str = "default";

// Phrase typography
pub const PHRASE_FONT_FAMILY: &str = "'Indie Flower', cursive";

pub const LETTER_LINES: &[&str] = &[
    "Hoy el cielo entero se vistió de fiesta para ti.",
    "Por fin 20 añitos,",
    "Que este nuevo año llegue lleno de risas, de abrazos y de momentos bonitos con tu familia y tus amigos. Gracias por tu manera de ver el mundo y por cada rato compartido.",
    "Cuando necesites cualquier cosa, recuerda que aquí estaré. Eres constante, valiente y capaz de todo lo que te propongas. Muchas bendiciones y éxitos en todo.",
    "HAPPY BIRTHDAY!!!",
];
