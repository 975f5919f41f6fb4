//! Tailwind class tokens shared by the components

use flags_core::Continent;

pub mod gradients {
    /// Main actions and active states
    pub const PRIMARY: &str = "from-violet-500 to-pink-500";
    /// Filter toggle while the bar is hidden
    pub const SECONDARY: &str = "from-emerald-400 to-teal-500";
    /// Filter toggle while the bar is shown
    pub const ACTIVE: &str = "from-orange-400 to-pink-500";
    /// Fullscreen button
    pub const INFO: &str = "from-cyan-400 to-blue-500";
    pub const SETTINGS: &str = PRIMARY;
    /// Language picker backdrop
    pub const BRAND: &str = "from-violet-500 via-purple-500 to-pink-500";
}

/// Rotating palette for flag cards
pub const CARD_GRADIENTS: [&str; 8] = [
    "from-red-400 to-orange-300",
    "from-orange-400 to-yellow-300",
    "from-yellow-400 to-lime-300",
    "from-emerald-400 to-teal-300",
    "from-cyan-400 to-blue-300",
    "from-blue-400 to-indigo-300",
    "from-violet-400 to-purple-300",
    "from-pink-400 to-rose-300",
];

pub const ICON_BUTTON: &str = "w-10 h-10 flex items-center justify-center rounded-2xl text-white shadow-md \
     hover:shadow-lg hover:-translate-y-0.5 active:scale-95 transition-all duration-150";

pub const PILL_BUTTON: &str = "flex items-center gap-1.5 px-5 py-2 rounded-full font-black text-sm \
     transition-all duration-150 active:scale-95";

pub const ACTION_BUTTON: &str = "w-full py-3 rounded-2xl font-black text-sm shadow-md \
     hover:shadow-lg hover:-translate-y-0.5 active:scale-95 transition-all duration-150";

pub const OPTION_BUTTON: &str =
    "flex-1 py-3 rounded-2xl text-sm font-black transition-all duration-150 active:scale-95";

pub fn card_gradient(index: usize) -> &'static str {
    CARD_GRADIENTS[index % CARD_GRADIENTS.len()]
}

pub fn continent_gradient(continent: Continent) -> &'static str {
    match continent {
        Continent::Africa => "from-amber-400 to-orange-500",
        Continent::Asia => "from-red-400 to-pink-500",
        Continent::Europe => "from-blue-400 to-indigo-500",
        Continent::NorthAmerica => "from-emerald-400 to-green-500",
        Continent::SouthAmerica => "from-lime-400 to-emerald-500",
        Continent::Oceania => "from-cyan-400 to-sky-500",
        Continent::Antarctica => "from-slate-300 to-slate-500",
    }
}

pub fn icon_button(gradient: &str) -> String {
    format!("{ICON_BUTTON} bg-gradient-to-br {gradient}")
}

pub fn pill_button(active: bool) -> String {
    if active {
        format!(
            "{PILL_BUTTON} bg-gradient-to-r {} text-white shadow-md scale-105",
            gradients::PRIMARY
        )
    } else {
        format!(
            "{PILL_BUTTON} bg-white text-gray-500 shadow-sm hover:shadow-md hover:-translate-y-0.5 border border-gray-100"
        )
    }
}

pub fn option_button(active: bool) -> String {
    if active {
        format!(
            "{OPTION_BUTTON} bg-gradient-to-br {} text-white shadow-lg scale-105",
            gradients::PRIMARY
        )
    } else {
        format!("{OPTION_BUTTON} bg-gray-100 text-gray-600 hover:bg-gray-200")
    }
}

pub fn action_button(gradient: &str) -> String {
    format!("{ACTION_BUTTON} bg-gradient-to-r {gradient} text-white")
}
