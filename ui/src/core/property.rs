//! Compiled-in details of the property the companion is built for.
//!
//! Everything a guest may need to reach (phones, WiFi, maps, operators) is
//! kept here so views never hard-code contact data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyProfile {
    pub name: &'static str,
    pub address: &'static str,
    pub address_maps_url: &'static str,
    pub contact_phone: &'static str,
    pub contact_email: &'static str,
    /// Receives the "documents uploaded" message of the check-in flow.
    pub documents_whatsapp: &'static str,
    /// Receives breakfast orders.
    pub breakfast_whatsapp: &'static str,
    /// Receives check-out requests.
    pub checkout_whatsapp: &'static str,
    pub rooms: &'static [&'static str],
    pub wifi: WifiCredentials,
    pub map_embed_url: &'static str,
    pub itinerary_url: &'static str,
    pub cruise_operators: &'static [(&'static str, &'static str)],
    pub service_worker_path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: &'static str,
    pub password: &'static str,
}

/// Value of the room `<select>` before the guest picks one.
pub const ROOM_PLACEHOLDER: &str = "none";

pub const MIPA: PropertyProfile = PropertyProfile {
    name: "MiPA",
    address: "Via San Giovanni 42, Milazzo (ME)",
    address_maps_url: "https://maps.google.com/maps?q=Via+San+Giovanni+42,+Milazzo+(ME)",
    contact_phone: "+393339201524",
    contact_email: "studiosmipa@gmail.com",
    documents_whatsapp: "+3154896131616",
    breakfast_whatsapp: "393339201524",
    checkout_whatsapp: "+31254878946",
    rooms: &["MiPA1", "MiPA2", "MiPA3", "MiPA4"],
    wifi: WifiCredentials {
        ssid: "MiPA_guests",
        password: "viaS.Giovanni/42",
    },
    map_embed_url:
        "https://www.google.com/maps/d/embed?mid=15vrvCbCRnWxkxZrUN1FkFf96XWx7sUyc&hl=it&ehbc=2E312F",
    itinerary_url: "https://esploramilazzo.onrender.com/",
    cruise_operators: &[
        ("Navisal", "https://navisal.com/EN/excursions.aspx"),
        ("Tarnav", "https://minicrociere.tarnav.it/minicruises/"),
    ],
    service_worker_path: "/service-worker.js",
};
