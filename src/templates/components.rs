use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::db::entities::{artist, venue};

pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/300x300/1a1a1a/ffffff?text=No+Image";

pub enum FlashKind {
    Success,
    Error,
}

/// One-shot notice rendered at the top of the page a mutation lands on.
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

pub fn flash_banner(flash: &Flash) -> Markup {
    let classes = match flash.kind {
        FlashKind::Success => "bg-green-100 border border-green-300 text-green-800",
        FlashKind::Error => "bg-red-100 border border-red-300 text-red-800",
    };

    html! {
        div class=(format!("{} rounded-md px-4 py-3 mb-6", classes)) role="alert" {
            (flash.message)
        }
    }
}

pub fn search_form(action: &str, placeholder: &str) -> Markup {
    html! {
        form method="get" action=(action) class="mb-6" {
            div class="flex gap-2" {
                input
                    type="text"
                    name="search_term"
                    placeholder=(placeholder)
                    class="flex-grow px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
                button type="submit" class="px-4 py-2 bg-primary text-white rounded-md font-medium" {
                    "Search"
                }
            }
        }
    }
}

pub fn text_input(label: &str, name: &str, value: &str) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" {
                (label)
            }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
        }
    }
}

pub fn textarea_input(label: &str, name: &str, value: &str) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-2" {
                (label)
            }
            textarea
                id=(name)
                name=(name)
                rows="3"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                (value)
            }
        }
    }
}

pub fn checkbox_input(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="flex items-center gap-2" {
            input type="checkbox" id=(name) name=(name) value="y" checked[checked];
            label for=(name) class="text-sm font-medium text-gray-700" {
                (label)
            }
        }
    }
}

pub fn venue_card(venue: &venue::Model) -> Markup {
    let image = venue.image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        div class="bg-white rounded-lg shadow-md overflow-hidden" {
            img src=(image) alt=(venue.name) class="w-full aspect-video object-cover" loading="lazy";
            div class="p-4" {
                a href=(format!("/venues/{}", venue.id)) class="font-semibold text-gray-900 hover:text-primary" {
                    (venue.name)
                }
                p class="text-sm text-gray-600" {
                    (venue.city) ", " (venue.state)
                }
                @if venue.seeking_talent {
                    span class="inline-block mt-2 px-2 py-1 text-xs font-semibold text-white bg-green-500 rounded-full" {
                        "Seeking talent"
                    }
                }
            }
        }
    }
}

pub fn artist_card(artist: &artist::Model) -> Markup {
    let image = artist.image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        div class="bg-white rounded-lg shadow-md overflow-hidden" {
            img src=(image) alt=(artist.name) class="w-full aspect-square object-cover" loading="lazy";
            div class="p-4" {
                a href=(format!("/artists/{}", artist.id)) class="font-semibold text-gray-900 hover:text-primary" {
                    (artist.name)
                }
                p class="text-sm text-gray-600" {
                    (artist.city) ", " (artist.state)
                }
                @if artist.seeking_venue {
                    span class="inline-block mt-2 px-2 py-1 text-xs font-semibold text-white bg-green-500 rounded-full" {
                        "Seeking venues"
                    }
                }
            }
        }
    }
}

/// Card for one show on a detail page: the counterpart (artist on a venue
/// page, venue on an artist page) plus the start time.
pub fn show_card(
    title: &str,
    href: &str,
    image_link: Option<&str>,
    start_time: &NaiveDateTime,
) -> Markup {
    let image = image_link.unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        div class="bg-white rounded-lg shadow-md p-4 flex items-center gap-4" {
            img src=(image) alt=(title) class="w-16 h-16 rounded-full object-cover";
            div {
                a href=(href) class="font-semibold text-gray-900 hover:text-primary" {
                    (title)
                }
                p class="text-sm text-gray-600" {
                    (format_start_time(start_time))
                }
            }
        }
    }
}

pub fn genre_tags(genres: &[&str]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-2 py-1 text-xs font-semibold bg-indigo-100 text-indigo-800 rounded-full" {
                    (genre)
                }
            }
        }
    }
}

pub fn format_start_time(start_time: &NaiveDateTime) -> String {
    start_time.format("%a %b %e, %Y %l:%M %p").to_string()
}
