//! Render an endpoint fallback chain for a video URL
//!
//! Run with: cargo run --example relay_plan

use tubemend_core::{source::SourcePlan, video::extract_video_id};

fn main() {
    let plan = SourcePlan::from_json(
        r#"{
            "endpoints": [
                { "name": "primary",  "url": "https://converter-a.example/api/mp3/{id}?bitrate={bitrate}" },
                { "name": "backup",   "url": "https://converter-b.example/button/mp3/{id}" },
                { "name": "lastresort", "url": "https://converter-c.example/mp3/{id}" }
            ]
        }"#,
    )
    .expect("sample plan parses");

    let id = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .expect("sample URL is valid");

    println!("video id: {id}");
    println!("fetch order:");
    for target in plan.render_all(&id, 128).expect("plan renders") {
        println!("  {:12} {}", target.name, target.url);
    }
}
