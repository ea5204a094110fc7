// App layer: everything the user sees. View tree, card and page builders, output formats, theme and the terminal session.

pub mod card;
pub mod html;
pub mod page;
pub mod session;
pub mod text;
pub mod theme;
pub mod view;
