use crate::app::view::{Element, Node};
use crate::domain::model::LookupResult;

pub const TYPES_CONTAINER_ID: &str = "typesContainer";

const TYPE_CHIP_CLASSES: &str = "px-4 py-1 bg-red-100 text-red-700 dark:bg-red-900/40 \
     dark:text-red-300 rounded-full text-xs font-bold uppercase tracking-wider shadow-sm";
const STAT_LABEL_CLASSES: &str = "text-xs font-bold text-slate-400 uppercase tracking-wider mb-1";
const STAT_VALUE_CLASSES: &str = "font-bold text-slate-700 dark:text-slate-200";

/// 只把第一個字元轉大寫，其餘不動
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn display_id(id: u32) -> String {
    format!("#{:03}", id)
}

/// 原始值以十分之一為單位，用整數運算轉成一位小數
pub fn format_tenths(raw: u32, unit: &str) -> String {
    format!("{}.{} {}", raw / 10, raw % 10, unit)
}

pub fn display_height(height: u32) -> String {
    format_tenths(height, "m")
}

pub fn display_weight(weight: u32) -> String {
    format_tenths(weight, "kg")
}

pub fn display_base_experience(base_experience: Option<u32>) -> String {
    base_experience
        .map(|exp| exp.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// 由查詢結果建立卡片
pub fn render_card(data: &LookupResult) -> Element {
    let name = display_name(&data.name);

    Element::new("div")
        .class("flex flex-col items-center animate-pop-in")
        .child(sprite_gallery(data, &name))
        .child(
            Element::new("div")
                .class("text-center mt-6 w-full")
                .child(
                    Element::new("span")
                        .id("pokemonId")
                        .class("text-sm font-bold text-slate-400 dark:text-slate-500 tracking-widest")
                        .text(display_id(data.id)),
                )
                .child(
                    Element::new("h2")
                        .id("pokemonName")
                        .class("text-3xl font-black text-slate-800 dark:text-white mb-3")
                        .text(name),
                )
                .child(
                    Element::new("div")
                        .id(TYPES_CONTAINER_ID)
                        .class("flex flex-wrap gap-2 justify-center mb-6")
                        .children(data.type_names().map(type_chip)),
                ),
        )
        .child(
            Element::new("div")
                .class("grid grid-cols-3 gap-4 w-full border-t border-slate-100 dark:border-slate-700 pt-6")
                .child(stat("pokemonHeight", "Height", display_height(data.height)))
                .child(stat("pokemonWeight", "Weight", display_weight(data.weight)))
                .child(stat(
                    "pokemonBaseExp",
                    "Base Exp",
                    display_base_experience(data.base_experience),
                )),
        )
}

fn sprite_gallery(data: &LookupResult, name: &str) -> Element {
    let mut gallery = Element::new("div").class("relative group mt-2");

    if let Some(front) = &data.sprites.front_default {
        gallery = gallery.child(
            Element::new("img")
                .attr("src", front.as_str())
                .attr("alt", name)
                .class("w-48 h-48 drop-shadow-xl group-hover:scale-110 transition-transform duration-300"),
        );
    }

    let thumbnails = [
        (&data.sprites.back_default, "Back view", "Back View"),
        (&data.sprites.front_shiny, "Shiny version", "Shiny Version"),
    ]
    .into_iter()
    .filter_map(|(src, alt, title)| {
        src.as_ref().map(|src| {
            Element::new("img")
                .attr("src", src.as_str())
                .attr("alt", alt)
                .attr("title", title)
                .class("w-12 h-12 hover:scale-125 transition-transform cursor-pointer")
        })
    });

    gallery.child(
        Element::new("div")
            .class("flex justify-center gap-4 mt-2 bg-slate-100 dark:bg-slate-700 p-2 rounded-2xl shadow-inner")
            .children(thumbnails),
    )
}

fn type_chip(type_name: &str) -> Node {
    Element::new("span")
        .class(TYPE_CHIP_CLASSES)
        .text(type_name)
        .into()
}

fn stat(id: &str, label: &str, value: String) -> Element {
    Element::new("div")
        .class("text-center flex flex-col items-center p-2 bg-slate-50 dark:bg-slate-700/50 rounded-xl")
        .child(Element::new("span").class(STAT_LABEL_CLASSES).text(label))
        .child(Element::new("span").id(id).class(STAT_VALUE_CLASSES).text(value))
}
