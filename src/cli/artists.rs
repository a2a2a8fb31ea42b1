pub fn artist_albums(artist_id: &str) {
    let mut client = super::connect();
    super::fetch("Fetching albums...", || client.get_artist_albums(artist_id));
}

pub fn artist_top_tracks(artist_id: &str, market: &str) {
    let mut client = super::connect();
    super::fetch(&format!("Fetching top tracks in {market}..."), || {
        client.get_artist_top_tracks_in_market(artist_id, market)
    });
}

pub fn artist_related(artist_id: &str) {
    let mut client = super::connect();
    super::fetch("Fetching related artists...", || {
        client.get_artist_related_artists(artist_id)
    });
}
