use maud::{html, Markup};

use crate::db::entities::{artist, venue};
use crate::db::repositories::{SearchResults, ShowListing, ShowPartition};

use super::components::{
    artist_card, checkbox_input, flash_banner, format_start_time, genre_tags, search_form,
    show_card, text_input, textarea_input, venue_card, Flash, PLACEHOLDER_IMAGE,
};
use super::layout::base_layout;

pub fn home_page(flash: Option<&Flash>) -> Markup {
    base_layout(
        "Home",
        html! {
            @if let Some(flash) = flash {
                (flash_banner(flash))
            }

            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Showbill" }
                p class="text-lg text-gray-600 mb-8" {
                    "Find and book local venues, artists, and shows."
                }
                div class="flex justify-center gap-4" {
                    a href="/venues/create" class="px-4 py-2 bg-primary text-white rounded-md font-medium" {
                        "Post a venue"
                    }
                    a href="/artists/create" class="px-4 py-2 bg-primary text-white rounded-md font-medium" {
                        "Post an artist"
                    }
                    a href="/shows/create" class="px-4 py-2 bg-primary text-white rounded-md font-medium" {
                        "Post a show"
                    }
                }
            }
        },
    )
}

//  Venues
//  ----------------------------------------------------------------

pub fn venues_page(venues: &[venue::Model]) -> Markup {
    base_layout(
        "Venues",
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "Venues" }
                a href="/venues/create" class="px-4 py-2 bg-primary text-white rounded-md text-sm font-medium" {
                    "Post a venue"
                }
            }

            (search_form("/venues/search", "Search venues by name..."))

            @if venues.is_empty() {
                p class="text-gray-600" { "No venues listed yet." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
                    @for venue in venues {
                        (venue_card(venue))
                    }
                }
            }
        },
    )
}

pub fn venue_search_page(search_term: &str, results: &SearchResults<venue::Model>) -> Markup {
    base_layout(
        "Search Venues",
        html! {
            (search_form("/venues/search", "Search venues by name..."))

            h1 class="text-xl font-semibold text-gray-900 mb-4" {
                "Number of search results for \"" (search_term) "\": " (results.count)
            }

            div class="space-y-4" {
                @for venue in &results.items {
                    div class="bg-white rounded-lg shadow-sm p-4" {
                        a href=(format!("/venues/{}", venue.id)) class="font-semibold text-gray-900 hover:text-primary" {
                            (venue.name)
                        }
                        p class="text-sm text-gray-600" {
                            (venue.city) ", " (venue.state)
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &venue::Model, shows: &ShowPartition) -> Markup {
    let image = venue.image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    base_layout(
        &venue.name,
        html! {
            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    img src=(image) alt=(venue.name) class="w-full md:w-64 rounded-lg object-cover";

                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900 mb-2" { (venue.name) }
                        (genre_tags(&venue.genre_list()))

                        dl class="mt-4 space-y-1 text-gray-700" {
                            div { dt class="inline font-medium" { "City: " } dd class="inline" { (venue.city) ", " (venue.state) } }
                            div { dt class="inline font-medium" { "Address: " } dd class="inline" { (venue.address) } }
                            div { dt class="inline font-medium" { "Phone: " } dd class="inline" { (venue.phone) } }
                            @if let Some(website) = &venue.website_link {
                                div { dt class="inline font-medium" { "Website: " } dd class="inline" { a href=(website) class="text-primary hover:underline" { (website) } } }
                            }
                            @if let Some(facebook) = &venue.facebook_link {
                                div { dt class="inline font-medium" { "Facebook: " } dd class="inline" { a href=(facebook) class="text-primary hover:underline" { (facebook) } } }
                            }
                        }

                        @if venue.seeking_talent {
                            div class="mt-4" {
                                span class="px-2 py-1 text-xs font-semibold text-white bg-green-500 rounded-full" {
                                    "Seeking talent"
                                }
                                @if let Some(description) = &venue.description {
                                    p class="mt-2 text-gray-700" { (description) }
                                }
                            }
                        } @else {
                            p class="mt-4 text-sm text-gray-500" { "Not currently seeking talent" }
                        }

                        div class="mt-6 flex gap-2" {
                            a href=(format!("/venues/{}/edit", venue.id))
                              class="px-4 py-2 bg-primary text-white rounded-md text-sm font-medium" {
                                "Edit venue"
                            }
                            button
                                class="px-4 py-2 bg-red-600 text-white rounded-md text-sm font-medium"
                                onclick=(format!("fetch('/venues/{}', {{method: 'DELETE'}}).then(() => window.location = '/')", venue.id)) {
                                "Delete venue"
                            }
                        }
                    }
                }
            }

            (shows_section(&format!("{} Upcoming Shows", shows.upcoming.len()), &shows.upcoming, ShowCounterpart::Artist))
            (shows_section(&format!("{} Past Shows", shows.past.len()), &shows.past, ShowCounterpart::Artist))
        },
    )
}

pub fn venue_form_page(
    title: &str,
    action: &str,
    venue: Option<&venue::Model>,
    flash: Option<&Flash>,
) -> Markup {
    let name = venue.map(|v| v.name.as_str()).unwrap_or("");
    let city = venue.map(|v| v.city.as_str()).unwrap_or("");
    let state = venue.map(|v| v.state.as_str()).unwrap_or("");
    let address = venue.map(|v| v.address.as_str()).unwrap_or("");
    let phone = venue.map(|v| v.phone.as_str()).unwrap_or("");
    let genres = venue.map(|v| v.genres.as_str()).unwrap_or("");
    let image_link = venue.and_then(|v| v.image_link.as_deref()).unwrap_or("");
    let facebook_link = venue.and_then(|v| v.facebook_link.as_deref()).unwrap_or("");
    let website_link = venue.and_then(|v| v.website_link.as_deref()).unwrap_or("");
    let seeking_talent = venue.map(|v| v.seeking_talent).unwrap_or(false);
    let description = venue.and_then(|v| v.description.as_deref()).unwrap_or("");
    let submit_label = if venue.is_some() { "Save Changes" } else { "Create Venue" };

    base_layout(
        title,
        html! {
            @if let Some(flash) = flash {
                (flash_banner(flash))
            }

            div class="max-w-2xl mx-auto bg-white rounded-lg shadow-md p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }

                form method="post" action=(action) class="space-y-4" {
                    (text_input("Name", "name", name))
                    div class="grid grid-cols-2 gap-4" {
                        (text_input("City", "city", city))
                        (text_input("State", "state", state))
                    }
                    (text_input("Address", "address", address))
                    (text_input("Phone", "phone", phone))
                    (text_input("Genres (comma separated)", "genres", genres))
                    (text_input("Image link", "image_link", image_link))
                    (text_input("Facebook link", "facebook_link", facebook_link))
                    (text_input("Website link", "website_link", website_link))
                    (checkbox_input("Seeking talent", "seeking_talent", seeking_talent))
                    (textarea_input("Seeking description", "seeking_description", description))

                    button type="submit" class="w-full px-4 py-2 bg-primary text-white rounded-md font-medium" {
                        (submit_label)
                    }
                }
            }
        },
    )
}

//  Artists
//  ----------------------------------------------------------------

pub fn artists_page(artists: &[artist::Model]) -> Markup {
    base_layout(
        "Artists",
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "Artists" }
                a href="/artists/create" class="px-4 py-2 bg-primary text-white rounded-md text-sm font-medium" {
                    "Post an artist"
                }
            }

            (search_form("/artists/search", "Search artists by name..."))

            @if artists.is_empty() {
                p class="text-gray-600" { "No artists listed yet." }
            } @else {
                div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6" {
                    @for artist in artists {
                        (artist_card(artist))
                    }
                }
            }
        },
    )
}

pub fn artist_search_page(search_term: &str, results: &SearchResults<artist::Model>) -> Markup {
    base_layout(
        "Search Artists",
        html! {
            (search_form("/artists/search", "Search artists by name..."))

            h1 class="text-xl font-semibold text-gray-900 mb-4" {
                "Number of search results for \"" (search_term) "\": " (results.count)
            }

            div class="space-y-4" {
                @for artist in &results.items {
                    div class="bg-white rounded-lg shadow-sm p-4" {
                        a href=(format!("/artists/{}", artist.id)) class="font-semibold text-gray-900 hover:text-primary" {
                            (artist.name)
                        }
                        p class="text-sm text-gray-600" {
                            (artist.city) ", " (artist.state)
                        }
                    }
                }
            }
        },
    )
}

pub fn artist_detail_page(artist: &artist::Model, shows: &ShowPartition) -> Markup {
    let image = artist.image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    base_layout(
        &artist.name,
        html! {
            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    img src=(image) alt=(artist.name) class="w-full md:w-64 rounded-lg object-cover";

                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900 mb-2" { (artist.name) }
                        (genre_tags(&artist.genre_list()))

                        dl class="mt-4 space-y-1 text-gray-700" {
                            div { dt class="inline font-medium" { "City: " } dd class="inline" { (artist.city) ", " (artist.state) } }
                            div { dt class="inline font-medium" { "Phone: " } dd class="inline" { (artist.phone) } }
                            @if let Some(website) = &artist.website_link {
                                div { dt class="inline font-medium" { "Website: " } dd class="inline" { a href=(website) class="text-primary hover:underline" { (website) } } }
                            }
                            @if let Some(facebook) = &artist.facebook_link {
                                div { dt class="inline font-medium" { "Facebook: " } dd class="inline" { a href=(facebook) class="text-primary hover:underline" { (facebook) } } }
                            }
                        }

                        @if artist.seeking_venue {
                            div class="mt-4" {
                                span class="px-2 py-1 text-xs font-semibold text-white bg-green-500 rounded-full" {
                                    "Seeking venues"
                                }
                                @if let Some(description) = &artist.description {
                                    p class="mt-2 text-gray-700" { (description) }
                                }
                            }
                        } @else {
                            p class="mt-4 text-sm text-gray-500" { "Not currently seeking venues" }
                        }

                        div class="mt-6" {
                            a href=(format!("/artists/{}/edit", artist.id))
                              class="px-4 py-2 bg-primary text-white rounded-md text-sm font-medium" {
                                "Edit artist"
                            }
                        }
                    }
                }
            }

            (shows_section(&format!("{} Upcoming Shows", shows.upcoming.len()), &shows.upcoming, ShowCounterpart::Venue))
            (shows_section(&format!("{} Past Shows", shows.past.len()), &shows.past, ShowCounterpart::Venue))
        },
    )
}

pub fn artist_form_page(
    title: &str,
    action: &str,
    artist: Option<&artist::Model>,
    flash: Option<&Flash>,
) -> Markup {
    let name = artist.map(|a| a.name.as_str()).unwrap_or("");
    let city = artist.map(|a| a.city.as_str()).unwrap_or("");
    let state = artist.map(|a| a.state.as_str()).unwrap_or("");
    let phone = artist.map(|a| a.phone.as_str()).unwrap_or("");
    let genres = artist.map(|a| a.genres.as_str()).unwrap_or("");
    let image_link = artist.and_then(|a| a.image_link.as_deref()).unwrap_or("");
    let facebook_link = artist.and_then(|a| a.facebook_link.as_deref()).unwrap_or("");
    let website_link = artist.and_then(|a| a.website_link.as_deref()).unwrap_or("");
    let seeking_venue = artist.map(|a| a.seeking_venue).unwrap_or(false);
    let description = artist.and_then(|a| a.description.as_deref()).unwrap_or("");
    let submit_label = if artist.is_some() { "Save Changes" } else { "Create Artist" };

    base_layout(
        title,
        html! {
            @if let Some(flash) = flash {
                (flash_banner(flash))
            }

            div class="max-w-2xl mx-auto bg-white rounded-lg shadow-md p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { (title) }

                form method="post" action=(action) class="space-y-4" {
                    (text_input("Name", "name", name))
                    div class="grid grid-cols-2 gap-4" {
                        (text_input("City", "city", city))
                        (text_input("State", "state", state))
                    }
                    (text_input("Phone", "phone", phone))
                    (text_input("Genres (comma separated)", "genres", genres))
                    (text_input("Image link", "image_link", image_link))
                    (text_input("Facebook link", "facebook_link", facebook_link))
                    (text_input("Website link", "website_link", website_link))
                    (checkbox_input("Seeking venues", "seeking_venue", seeking_venue))
                    (textarea_input("Seeking description", "seeking_description", description))

                    button type="submit" class="w-full px-4 py-2 bg-primary text-white rounded-md font-medium" {
                        (submit_label)
                    }
                }
            }
        },
    )
}

//  Shows
//  ----------------------------------------------------------------

pub fn shows_page(shows: &[ShowListing]) -> Markup {
    base_layout(
        "Shows",
        html! {
            div class="flex justify-between items-center mb-6" {
                h1 class="text-2xl font-bold text-gray-900" { "Shows" }
                a href="/shows/create" class="px-4 py-2 bg-primary text-white rounded-md text-sm font-medium" {
                    "Post a show"
                }
            }

            @if shows.is_empty() {
                p class="text-gray-600" { "No shows listed yet." }
            } @else {
                div class="bg-white rounded-lg shadow-md overflow-hidden" {
                    table class="min-w-full divide-y divide-gray-200" {
                        thead class="bg-gray-50" {
                            tr {
                                th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase" { "Venue" }
                                th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase" { "Artist" }
                                th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase" { "Start time" }
                            }
                        }
                        tbody class="divide-y divide-gray-200" {
                            @for show in shows {
                                tr {
                                    td class="px-4 py-3" {
                                        a href=(format!("/venues/{}", show.venue_id)) class="text-primary hover:underline" {
                                            (show.venue_name)
                                        }
                                    }
                                    td class="px-4 py-3" {
                                        div class="flex items-center gap-3" {
                                            img
                                                src=(show.artist_image_link.as_deref().unwrap_or(PLACEHOLDER_IMAGE))
                                                alt=(show.artist_name)
                                                class="w-8 h-8 rounded-full object-cover";
                                            a href=(format!("/artists/{}", show.artist_id)) class="text-primary hover:underline" {
                                                (show.artist_name)
                                            }
                                        }
                                    }
                                    td class="px-4 py-3 text-gray-700" {
                                        (format_start_time(&show.start_time))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn show_form_page(flash: Option<&Flash>) -> Markup {
    base_layout(
        "New Show",
        html! {
            @if let Some(flash) = flash {
                (flash_banner(flash))
            }

            div class="max-w-2xl mx-auto bg-white rounded-lg shadow-md p-6" {
                h1 class="text-2xl font-bold text-gray-900 mb-6" { "List a new show" }

                form method="post" action="/shows/create" class="space-y-4" {
                    (text_input("Artist ID", "artist_id", ""))
                    (text_input("Venue ID", "venue_id", ""))
                    div {
                        label for="start_time" class="block text-sm font-medium text-gray-700 mb-2" {
                            "Start time"
                        }
                        input
                            type="datetime-local"
                            id="start_time"
                            name="start_time"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
                    }

                    button type="submit" class="w-full px-4 py-2 bg-primary text-white rounded-md font-medium" {
                        "Create Show"
                    }
                }
            }
        },
    )
}

//  Errors
//  ----------------------------------------------------------------

pub fn not_found_page() -> Markup {
    base_layout(
        "Not Found",
        html! {
            div class="text-center py-16" {
                h1 class="text-5xl font-bold text-gray-900 mb-4" { "404" }
                p class="text-lg text-gray-600" { "The page you're looking for doesn't exist." }
                a href="/" class="text-primary hover:underline mt-4 inline-block" { "Back to home" }
            }
        },
    )
}

pub fn server_error_page() -> Markup {
    base_layout(
        "Server Error",
        html! {
            div class="text-center py-16" {
                h1 class="text-5xl font-bold text-gray-900 mb-4" { "500" }
                p class="text-lg text-gray-600" { "Something went wrong on our side. Please try again." }
                a href="/" class="text-primary hover:underline mt-4 inline-block" { "Back to home" }
            }
        },
    )
}

#[derive(Clone, Copy)]
enum ShowCounterpart {
    Artist,
    Venue,
}

fn shows_section(heading: &str, shows: &[ShowListing], counterpart: ShowCounterpart) -> Markup {
    html! {
        section class="mb-8" {
            h2 class="text-xl font-semibold text-gray-900 mb-4" { (heading) }

            @if shows.is_empty() {
                p class="text-gray-600" { "No shows." }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    @for show in shows {
                        @match counterpart {
                            ShowCounterpart::Artist => {
                                (show_card(
                                    &show.artist_name,
                                    &format!("/artists/{}", show.artist_id),
                                    show.artist_image_link.as_deref(),
                                    &show.start_time,
                                ))
                            }
                            ShowCounterpart::Venue => {
                                (show_card(
                                    &show.venue_name,
                                    &format!("/venues/{}", show.venue_id),
                                    show.venue_image_link.as_deref(),
                                    &show.start_time,
                                ))
                            }
                        }
                    }
                }
            }
        }
    }
}
