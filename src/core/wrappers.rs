// File: src/core/wrappers.rs
use crate::core::types::{Wrapper, WrapperOrigin, WrapperTemplate};

/// Named, ordered group of decorative templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperCategory {
    pub key: String,
    pub label: String,
    pub templates: Vec<WrapperTemplate>,
}

impl WrapperCategory {
    pub fn new(key: &str, label: &str, frames: &[(&str, &str)]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            templates: frames
                .iter()
                .map(|&(left, right)| WrapperTemplate::new(left, right))
                .collect(),
        }
    }
}

/// Which categories feed the generation wrapper list, and how.
/// Repeated frames are exact duplicates and collapse at dedup, but they fix
/// the wrapper numbering that style names, and so liked ids, are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperPlan {
    pub repeats: Vec<(String, usize)>,
    /// `(outer, inner)` category keys.
    pub pairs: Vec<(String, String)>,
}

impl WrapperPlan {
    pub fn standard() -> Self {
        let repeats = [
            ("KAOMOJI", 8),
            ("LENNY", 8),
            ("EMOJI", 10),
            ("BOX", 10),
            ("LINES", 10),
            ("ORNATE", 8),
            ("ARROWS", 8),
            ("THEME", 10),
        ];
        let pairs = [
            ("EMOJI", "BOX"),
            ("ORNATE", "LINES"),
            ("ARROWS", "EMOJI"),
            ("BOX", "LINES"),
        ];
        Self {
            repeats: repeats.iter().map(|&(k, n)| (k.to_string(), n)).collect(),
            pairs: pairs
                .iter()
                .map(|&(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }
}

/// Pushes `repeat` copies of every template in `category`.
pub fn apply_frames(out: &mut Vec<Wrapper>, category: &WrapperCategory, repeat: usize) {
    for _ in 0..repeat {
        for (variant, template) in category.templates.iter().enumerate() {
            out.push(Wrapper {
                template: template.clone(),
                origin: WrapperOrigin::Frame { category: category.key.clone(), variant },
            });
        }
    }
}

/// Pushes one wrapper per `(a, b)` pair with `b` nested inside `a`.
pub fn pair_wrap(out: &mut Vec<Wrapper>, outer: &WrapperCategory, inner: &WrapperCategory) {
    for (i, a) in outer.templates.iter().enumerate() {
        for (j, b) in inner.templates.iter().enumerate() {
            out.push(Wrapper {
                template: WrapperTemplate::compose(a, b),
                origin: WrapperOrigin::Paired {
                    outer: (outer.key.clone(), i),
                    inner: (inner.key.clone(), j),
                },
            });
        }
    }
}

/// Flat generation list: repeated frames, then paired products, then identity.
/// Plan entries naming unknown categories are skipped.
pub fn build_wrapper_list(categories: &[WrapperCategory], plan: &WrapperPlan) -> Vec<Wrapper> {
    let find = |key: &str| categories.iter().find(|c| c.key == key);
    let mut wrappers = Vec::new();

    for (key, repeat) in &plan.repeats {
        match find(key) {
            Some(category) => apply_frames(&mut wrappers, category, *repeat),
            None => log::warn!("Wrapper plan names unknown category '{}'", key),
        }
    }
    for (outer, inner) in &plan.pairs {
        match (find(outer), find(inner)) {
            (Some(a), Some(b)) => pair_wrap(&mut wrappers, a, b),
            _ => log::warn!("Wrapper plan pairs unknown categories '{}'/'{}'", outer, inner),
        }
    }
    wrappers.push(Wrapper { template: WrapperTemplate::identity(), origin: WrapperOrigin::Identity });

    wrappers
}

pub fn standard_categories() -> Vec<WrapperCategory> {
    vec![
        WrapperCategory::new("KAOMOJI", "Kaomoji", KAOMOJI),
        WrapperCategory::new("LENNY", "Lenny", LENNY),
        WrapperCategory::new("EMOJI", "Emoji", EMOJI),
        WrapperCategory::new("BOX", "Boxes", BOX),
        WrapperCategory::new("LINES", "Lines", LINES),
        WrapperCategory::new("ORNATE", "Ornate", ORNATE),
        WrapperCategory::new("ARROWS", "Arrows", ARROWS),
        WrapperCategory::new("THEME", "Themes", THEME),
    ]
}

const KAOMOJI: &[(&str, &str)] = &[
    ("(っ◔◡◔)っ ", " っ"),
    ("(づ｡◕‿‿◕｡)づ ", " (づ｡◕‿‿◕｡)づ"),
    ("(◍•ᴗ•◍)❤ ", " ❤(◍•ᴗ•◍)"),
    ("(＾▽＾) ", " (＾▽＾)"),
    ("(´｡• ᵕ •｡`) ", " (´｡• ᵕ •｡`)"),
    ("(★‿★) ", " (★‿★)"),
    ("(≧◡≦) ♡ ", " ♡ (≧◡≦)"),
    ("(˶˃ ᵕ ˂˶) ", " (˶˃ ᵕ ˂˶)"),
    ("(๑˃\u{335}ᴗ˂˵)و ", " ٩(ˊᗜˋ*)و"),
];

const LENNY: &[(&str, &str)] = &[
    ("( \u{361}° \u{35C}ʖ \u{361}°) ", " ( \u{361}° \u{35C}ʖ \u{361}°)"),
    ("( \u{361}~ \u{35C}ʖ \u{361}°) ", " ( \u{361}° \u{35C}ʖ \u{361}~)"),
    ("( \u{361}◎ \u{35C}ʖ \u{361}◎) ", " ( \u{361}◎ \u{35C}ʖ \u{361}◎)"),
    ("( \u{360}° \u{35F}ʖ \u{361}°) ", " ( \u{360}° \u{35F}ʖ \u{361}°)"),
    ("( \u{361}ಠ \u{35C}ʖ \u{361}ಠ) ", " ( \u{361}ಠ \u{35C}ʖ \u{361}ಠ)"),
    ("(ง \u{360}° \u{35F}ل\u{35C} \u{361}°)ง ", " ᕦ( \u{361}° \u{35C}ʖ \u{361}°)ᕤ"),
    ("( \u{361}• \u{35C}ʖ \u{361}•) ", " ( \u{361}• \u{35C}ʖ \u{361}•)"),
];

const EMOJI: &[(&str, &str)] = &[
    ("✨ ", " ✨"), ("🌸 ", " 🌸"), ("💫 ", " 💫"), ("🔥 ", " 🔥"),
    ("🌊 ", " 🌊"), ("🌈 ", " 🌈"), ("⭐ ", " ⭐"), ("💖 ", " 💖"),
    ("🪐 ", " 🪐"), ("⚡ ", " ⚡"), ("🌟 ", " 🌟"), ("🎯 ", " 🎯"),
    ("🪽 ", " 🪽"), ("🧊 ", " 🧊"), ("🌙 ", " 🌙"), ("🎀 ", " 🎀"),
    ("🔫 ", " 🔫"), ("💣 ", " 💣"), ("🗡\u{FE0F} ", " 🗡\u{FE0F}"), ("⚔\u{FE0F} ", " ⚔\u{FE0F}"),
    ("🏹 ", " 🏹"), ("🛡\u{FE0F} ", " 🛡\u{FE0F}"), ("🚬 ", " 🚬"), ("💎 ", " 💎"),
    ("👑 ", " 👑"), ("👑🏻 ", " 👑🏻"), ("👑🏾 ", " 👑🏾"), ("👑🏿 ", " 👑🏿"),
    ("🤴 ", " 🤴"), ("👸 ", " 👸"), ("🪖 ", " 🪖"), ("🎖\u{FE0F} ", " 🎖\u{FE0F}"),
    ("🏆 ", " 🏆"), ("🥇 ", " 🥇"), ("🥂 ", " 🥂"), ("🍾 ", " 🍾"),
    ("💵 ", " 💵"), ("💰 ", " 💰"), ("🤑 ", " 🤑"), ("💳 ", " 💳"),
    ("🧨 ", " 🧨"), ("🎆 ", " 🎆"), ("🎇 ", " 🎇"), ("🔥 ", " 🔥"),
    ("🚀 ", " 🚀"), ("🛸 ", " 🛸"), ("👨\u{200D}🚀 ", " 👨\u{200D}🚀"), ("👩\u{200D}🚀 ", " 👩\u{200D}🚀"),
    ("🛰\u{FE0F} ", " 🛰\u{FE0F}"), ("🌌 ", " 🌌"), ("🪐 ", " 🪐"), ("☄\u{FE0F} ", " ☄\u{FE0F}"),
    ("🌠 ", " 🌠"), ("🌙 ", " 🌙"), ("🪂 ", " 🪂"), ("🛸 ", " 🛸"),
    ("😎 ", " 😎"), ("🕶\u{FE0F} ", " 🕶\u{FE0F}"), ("🧢 ", " 🧢"), ("🎩 ", " 🎩"),
    ("🥷 ", " 🥷"), ("🤠 ", " 🤠"), ("🧥 ", " 🧥"), ("👕 ", " 👕"),
    ("👟 ", " 👟"), ("🥾 ", " 🥾"), ("👞 ", " 👞"), ("💼 ", " 💼"),
    ("🖤 ", " 🖤"), ("💀 ", " 💀"), ("☠\u{FE0F} ", " ☠\u{FE0F}"), ("👹 ", " 👹"),
    ("👺 ", " 👺"), ("🧛 ", " 🧛"), ("🧟 ", " 🧟"), ("🦾 ", " 🦾"),
    ("🔮 ", " 🔮"), ("⚡ ", " ⚡"), ("⚔\u{FE0F} ", " ⚔\u{FE0F}"), ("🛡\u{FE0F} ", " 🛡\u{FE0F}"),
    ("📡 ", " 📡"), ("🔭 ", " 🔭"), ("🕹\u{FE0F} ", " 🕹\u{FE0F}"), ("🎮 ", " 🎮"),
    ("🎧 ", " 🎧"), ("🎤 ", " 🎤"), ("🎸 ", " 🎸"), ("🥁 ", " 🥁"),
    ("🎺 ", " 🎺"), ("🎷 ", " 🎷"), ("💯 ", " 💯"), ("✅ ", " ✅"),
    ("♟\u{FE0F} ", " ♟\u{FE0F}"), ("♞ ", " ♞"), ("🃏 ", " 🃏"), ("🎴 ", " 🎴"),
    ("🧊 ", " 🧊"), ("❄\u{FE0F} ", " ❄\u{FE0F}"), ("☃\u{FE0F} ", " ☃\u{FE0F}"), ("🌨\u{FE0F} ", " 🌨\u{FE0F}"),
    ("🌪\u{FE0F} ", " 🌪\u{FE0F}"), ("🌀 ", " 🌀"), ("🌊 ", " 🌊"), ("🌫\u{FE0F} ", " 🌫\u{FE0F}"),
    ("🧨 ", " 🧨"), ("🎯 ", " 🎯"), ("🏹 ", " 🏹"), ("🔪 ", " 🔪"),
    ("🪓 ", " 🪓"), ("🔧 ", " 🔧"), ("⚙\u{FE0F} ", " ⚙\u{FE0F}"), ("🔩 ", " 🔩"),
];

const BOX: &[(&str, &str)] = &[
    ("【 ", " 】"), ("『 ", " 』"), ("「 ", " 」"), ("〔 ", " 〕"),
    ("《 ", " 》"), ("⟦ ", " ⟧"), ("⟨ ", " ⟩"), ("〖 ", " 〗"),
    ("⟪ ", " ⟫"), ("⟮ ", " ⟯"), ("❪ ", " ❫"), ("❲ ", " ❳"),
    ("❴ ", " ❵"), ("❬ ", " ❭"), ("⦃ ", " ⦄"), ("⦅ ", " ⦆"),
    ("⦇ ", " ⦈"), ("⦉ ", " ⦊"), ("⦋ ", " ⦌"), ("⦍ ", " ⦎"),
    ("⦏ ", " ⦐"), ("⦑ ", " ⦒"), ("⦓ ", " ⦔"), ("⦕ ", " ⦖"),
    ("⧼ ", " ⧽"), ("⸢ ", " ⸣"), ("⸤ ", " ⸥"), ("﹙ ", " ﹚"),
    ("﹛ ", " ﹜"), ("﹝ ", " ﹞"), ("（ ", " ）"), ("［ ", " ］"),
    ("｛ ", " ｝"), ("｟ ", " ｠"), ("❮ ", " ❯"), ("‹ ", " ›"),
    ("« ", " »"), ("„ ", " “"), ("⟅ ", " ⟆"), ("⟦ ", " ⟧"),
    ("⟨ ", " ⟩"), ("⟪ ", " ⟫"), ("⟬ ", " ⟭"), ("⟮ ", " ⟯"),
    ("⟴ ", " ⟵"), ("⟶ ", " ⟷"), ("⸨ ", " ⸩"), ("⦗ ", " ⦘"),
    ("⸦ ", " ⸧"), ("⸨ ", " ⸩"), ("⌈ ", " ⌉"), ("⌊ ", " ⌋"),
    ("⦋ ", " ⦌"), ("⦇ ", " ⦈"),
];

const LINES: &[(&str, &str)] = &[
    ("─═── ", " ──═─"),
    ("━━ ", " ━━"),
    ("╾━╤ ", " ╤━╼"),
    ("╔═╗ ", " ╚═╝"),
    ("▁▂▃▄▅▆▇ ", " ▇▆▅▄▃▂▁"),
    ("·•° ", " °•·"),
    ("•´¯`• ", " •´¯`•"),
    ("✦ ", " ✦"),
    ("⎯⎯ ", " ⎯⎯"),
    ("⎯\u{35F}\u{35F}\u{35E} ", " \u{35F}\u{35F}\u{35E}⎯"),
    ("⋆ ", " ⋆"),
    ("· · · ", " · · ·"),
    ("・‥… ", " …‥・"),
    ("︻デ═一 ", " 一═デ︻"),
    ("︻╦\u{335}\u{335}\u{347}\u{33F}\u{33F}\u{33F}\u{33F}╤── ", " ──╤\u{33F}\u{33F}\u{33F}\u{33F}\u{33F}\u{33F}╦\u{335}\u{335}\u{347}︻"),
    ("▄︻デ══━一 ", " 一━══デ︻▄"),
    ("(╯°□°）╯︵ ┻━┻ ", " ┻━┻ ︵ ╯(°□°╯)"),
    ("☭═╦═☭ ", " ☭═╦═☭"),
    ("✧╾━╤デ╦︻✧ ", " ✧︻╦デ╤━╼✧"),
    ("︻┻═┳一 ", " 一┳═┻︻"),
    ("╾━╤デ╦︻ ", " ︻╦デ╤━╼"),
    ("︻╦╤─ ", " ─╤╦︻"),
    ("⌬═─ ", " ─═⌬"),
    ("✪═─ ", " ─═✪"),
    ("︻⋆═━一 ", " 一━═⋆︻"),
];

const ORNATE: &[(&str, &str)] = &[
    ("꧁ ", " ꧂"), ("꧁༒ ", " ༒꧂"), ("◥꧁☆ ", " ☆꧂◤"), ("✧‧˚ ", " ˚‧✧"),
    ("✺ ", " ✺"), ("✵ ", " ✵"), ("✺✺ ", " ✺✺"), ("✷ ", " ✷"),
    ("✶ ", " ✶"), ("✿ ", " ✿"), ("❀ ", " ❀"), ("❁ ", " ❁"),
    ("✾ ", " ✾"), ("❃ ", " ❃"), ("❊ ", " ❊"), ("❋ ", " ❋"),
    ("✤ ", " ✤"), ("✥ ", " ✥"), ("✣ ", " ✣"), ("✢ ", " ✢"),
    ("✦ ", " ✦"), ("✧ ", " ✧"), ("✩ ", " ✩"), ("✪ ", " ✪"),
    ("✫ ", " ✫"), ("✬ ", " ✬"), ("✭ ", " ✭"), ("✮ ", " ✮"),
    ("✯ ", " ✯"), ("❂ ", " ❂"), ("❈ ", " ❈"), ("❉ ", " ❉"),
    ("✲ ", " ✲"), ("✱ ", " ✱"), ("✻ ", " ✻"), ("✼ ", " ✼"),
    ("✽ ", " ✽"), ("❇ ", " ❇"), ("❖ ", " ❖"), ("✺✧ ", " ✧✺"),
    ("✵✵ ", " ✵✵"), ("✿✿ ", " ✿✿"), ("❀❀ ", " ❀❀"), ("✾✾ ", " ✾✾"),
    ("✣✣ ", " ✣✣"), ("✦✦ ", " ✦✦"), ("✧✧ ", " ✧✧"), ("✩✩ ", " ✩✩"),
    ("✪✪ ", " ✪✪"), ("✫✫ ", " ✫✫"), ("✬✬ ", " ✬✬"), ("✭✭ ", " ✭✭"),
    ("✮✮ ", " ✮✮"), ("✯✯ ", " ✯✯"), ("❂❂ ", " ❂❂"), ("❉❉ ", " ❉❉"),
    ("❖❖ ", " ❖❖"), ("ღ ", " ღ"), ("♡ ", " ♡"), ("♥ ", " ♥"),
    ("❣ ", " ❣"), ("❤ ", " ❤"), ("💖 ", " 💖"), ("❦ ", " ❦"),
    ("❧ ", " ❧"), ("✿✧ ", " ✧✿"), ("❀✵ ", " ✵❀"), ("✶♡ ", " ♡✶"),
    ("✺❤ ", " ❤✺"), ("⟡ ", " ⟡"), ("✪★ ", " ★✪"), ("✧✦ ", " ✦✧"),
    ("✯☆ ", " ☆✯"), ("✵✿ ", " ✿✵"), ("❀✺ ", " ✺❀"), ("✾✧ ", " ✧✾"),
    ("✣✶ ", " ✶✣"), ("❊❋ ", " ❋❊"), ("✤✤ ", " ✤✤"), ("✱✲ ", " ✲✱"),
    ("✻✽ ", " ✽✻"), ("❇❈ ", " ❈❇"), ("❖✦ ", " ✦❖"), ("✩ღ ", " ღ✩"),
    ("✧❣ ", " ❣✧"), ("꧁✧ ", " ✧꧂"), ("꧁✦ ", " ✦꧂"), ("꧁✯ ", " ✯꧂"),
    ("꧁❀ ", " ❀꧂"), ("꧁❤ ", " ❤꧂"), ("꧁❖ ", " ❖꧂"), ("꧁✺ ", " ✺꧂"),
    ("꧁✵ ", " ✵꧂"), ("◥✧ ", " ✧◤"), ("◥✦ ", " ✦◤"), ("◥✯ ", " ✯◤"),
    ("◥❀ ", " ❀◤"), ("◥❤ ", " ❤◤"), ("◥❖ ", " ❖◤"), ("◥✺ ", " ✺◤"),
    ("◥✵ ", " ✵◤"),
];

const ARROWS: &[(&str, &str)] = &[
    ("➤ ", " ➤"), ("➳ ", " ➳"), ("➶ ", " ➷"), ("⇢ ", " ⇠"),
    ("⇨ ", " ⇦"), ("↠ ", " ↞"), ("➵ ", " ➵"), ("⇶ ", " ⇶"),
    ("⇵ ", " ⇵"), ("⇴ ", " ⇴"), ("➔ ", " ➔"), ("➙ ", " ➙"),
    ("➛ ", " ➛"), ("➜ ", " ➜"), ("➝ ", " ➝"), ("➞ ", " ➞"),
    ("➟ ", " ➟"), ("➡ ", " ➡"), ("⮕ ", " ⮕"), ("➠ ", " ➠"),
    ("➢ ", " ➢"), ("➣ ", " ➣"), ("➤ ", " ➤"), ("➥ ", " ➥"),
    ("➦ ", " ➦"), ("➧ ", " ➧"), ("➨ ", " ➨"), ("➩ ", " ➩"),
    ("➪ ", " ➪"), ("➫ ", " ➫"), ("➬ ", " ➬"), ("➭ ", " ➭"),
    ("➮ ", " ➮"), ("➯ ", " ➯"), ("➱ ", " ➱"), ("➲ ", " ➲"),
    ("➳ ", " ➳"), ("➴ ", " ➴"), ("➵ ", " ➵"), ("➶ ", " ➶"),
    ("➷ ", " ➷"), ("➸ ", " ➸"), ("➹ ", " ➹"), ("➺ ", " ➺"),
    ("➻ ", " ➻"), ("➼ ", " ➼"), ("➽ ", " ➽"), ("➾ ", " ➾"),
    ("⇀ ", " ⇀"), ("↼ ", " ↼"), ("⇁ ", " ⇁"), ("⇃ ", " ⇃"),
    ("⇂ ", " ⇂"), ("↿ ", " ↿"), ("⇄ ", " ⇄"), ("⇆ ", " ⇆"),
    ("⇅ ", " ⇅"), ("⇵ ", " ⇵"), ("⇈ ", " ⇈"), ("⇊ ", " ⇊"),
    ("⇉ ", " ⇉"), ("⇇ ", " ⇇"), ("⇋ ", " ⇋"), ("⇌ ", " ⇌"),
    ("⇍ ", " ⇍"), ("⇎ ", " ⇎"), ("↔ ", " ↔"), ("↕ ", " ↕"),
    ("↖ ", " ↖"), ("↗ ", " ↗"), ("↘ ", " ↘"), ("↙ ", " ↙"),
    ("↚ ", " ↚"), ("↛ ", " ↛"), ("↜ ", " ↜"), ("↝ ", " ↝"),
    ("↞ ", " ↞"), ("↟ ", " ↟"), ("↡ ", " ↡"), ("↢ ", " ↢"),
    ("↣ ", " ↣"), ("↤ ", " ↤"), ("↥ ", " ↥"), ("↦ ", " ↦"),
    ("↧ ", " ↧"), ("↨ ", " ↨"), ("↩ ", " ↩"), ("↪ ", " ↪"),
    ("↫ ", " ↫"), ("↬ ", " ↬"), ("↭ ", " ↭"), ("↯ ", " ↯"),
    ("↰ ", " ↰"), ("↱ ", " ↱"), ("↲ ", " ↲"), ("↳ ", " ↳"),
    ("↴ ", " ↴"), ("↵ ", " ↵"),
];

const THEME: &[(&str, &str)] = &[
    ("⚔\u{FE0F} ", " ⚔\u{FE0F}"), ("♛ ", " ♛"), ("♜ ", " ♜"), ("♝ ", " ♝"),
    ("☾ ", " ☽"), ("✪ ", " ✪"), ("✺ ", " ✺"), ("✙ ", " ✙"),
    ("♚ ", " ♚"), ("♛ ", " ♛"), ("♝ ", " ♝"), ("♞ ", " ♞"),
    ("♟ ", " ♟"), ("♔ ", " ♔"), ("♕ ", " ♕"), ("♖ ", " ♖"),
    ("♘ ", " ♘"), ("♙ ", " ♙"), ("♤ ", " ♤"), ("♧ ", " ♧"),
    ("♡ ", " ♡"), ("♢ ", " ♢"), ("♠ ", " ♠"), ("♣ ", " ♣"),
    ("♥ ", " ♥"), ("♦ ", " ♦"), ("⚜ ", " ⚜"), ("☠ ", " ☠"),
    ("☩ ", " ☩"), ("☨ ", " ☨"), ("✟ ", " ✟"), ("✞ ", " ✞"),
    ("☥ ", " ☥"), ("✝ ", " ✝"), ("✠ ", " ✠"), ("✢ ", " ✢"),
    ("✣ ", " ✣"), ("✤ ", " ✤"), ("✧ ", " ✧"), ("✦ ", " ✦"),
    ("✩ ", " ✩"), ("✬ ", " ✬"), ("✭ ", " ✭"), ("✮ ", " ✮"),
    ("✯ ", " ✯"), ("✵ ", " ✵"), ("✶ ", " ✶"), ("✷ ", " ✷"),
    ("✸ ", " ✸"), ("✹ ", " ✹"), ("✺ ", " ✺"), ("✻ ", " ✻"),
    ("✼ ", " ✼"), ("✽ ", " ✽"), ("✾ ", " ✾"), ("✿ ", " ✿"),
    ("❀ ", " ❀"), ("❁ ", " ❁"), ("❂ ", " ❂"), ("❃ ", " ❃"),
    ("❇ ", " ❇"), ("❈ ", " ❈"), ("❉ ", " ❉"), ("❊ ", " ❊"),
    ("❋ ", " ❋"), ("✪ ", " ✪"), ("✫ ", " ✫"), ("✬ ", " ✬"),
    ("✭ ", " ✭"), ("✮ ", " ✮"), ("✯ ", " ✯"), ("❖ ", " ❖"),
    ("✢ ", " ✢"), ("✣ ", " ✣"), ("⚝ ", " ⚝"), ("⚞ ", " ⚞"),
    ("⚟ ", " ⚟"), ("☪ ", " ☪"), ("☮ ", " ☮"), ("☯ ", " ☯"),
    ("☸ ", " ☸"), ("卍 ", " 卍"), ("卐 ", " 卐"), ("♅ ", " ♅"),
    ("♆ ", " ♆"), ("♇ ", " ♇"), ("⚒ ", " ⚒"), ("⚑ ", " ⚑"),
    ("⚐ ", " ⚐"), ("⚓ ", " ⚓"), ("⚡ ", " ⚡"), ("☾ ", " ☽"),
];
