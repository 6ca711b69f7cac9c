//! Headless walkthrough demo.
//!
//! Drives a scripted session at a fixed 90 Hz: a small gallery scene, a
//! select press on each hand in turn, and a slow look sweep that steers
//! the travel arc into the side walls. Useful for watching travel logs
//! without a headset or a renderer.

use anyhow::Result;
use glam::{Quat, Vec3};
use maquette_viewer::{extract_walk_proxy, FrameSnapshot, Pose, SceneMesh, Viewer};
use tracing_subscriber::prelude::*;

const FRAME_DT: f64 = 1.0 / 90.0;
const FRAME_COUNT: u32 = 720;

fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("maquette=debug".parse()?)
                .add_directive("maquette_locomotion=debug".parse()?)
                .add_directive("maquette_viewer=debug".parse()?),
        )
        .init();

    Ok(())
}

/// Quad panel as two triangles, corners wound in order.
fn quad(name: &str, corners: [Vec3; 4]) -> SceneMesh {
    SceneMesh {
        name: name.to_string(),
        vertices: corners.to_vec(),
        indices: vec![[0, 1, 2], [0, 2, 3]],
    }
}

/// A small gallery: proxy floor and three proxy walls, plus one visual
/// pedestal the traveler can walk straight through.
fn gallery_hall() -> Vec<SceneMesh> {
    vec![
        quad(
            "Floor_PROXY",
            [
                Vec3::new(-15.0, 0.0, 15.0),
                Vec3::new(15.0, 0.0, 15.0),
                Vec3::new(15.0, 0.0, -15.0),
                Vec3::new(-15.0, 0.0, -15.0),
            ],
        ),
        quad(
            "WallWest_PROXY",
            [
                Vec3::new(-4.0, 0.0, 15.0),
                Vec3::new(-4.0, 0.0, -15.0),
                Vec3::new(-4.0, 4.0, -15.0),
                Vec3::new(-4.0, 4.0, 15.0),
            ],
        ),
        quad(
            "WallEast_PROXY",
            [
                Vec3::new(4.0, 0.0, -15.0),
                Vec3::new(4.0, 0.0, 15.0),
                Vec3::new(4.0, 4.0, 15.0),
                Vec3::new(4.0, 4.0, -15.0),
            ],
        ),
        quad(
            "WallNorth_PROXY",
            [
                Vec3::new(-15.0, 0.0, -14.0),
                Vec3::new(15.0, 0.0, -14.0),
                Vec3::new(15.0, 4.0, -14.0),
                Vec3::new(-15.0, 4.0, -14.0),
            ],
        ),
        quad(
            "Pedestal",
            [
                Vec3::new(-0.5, 0.0, 4.5),
                Vec3::new(0.5, 0.0, 4.5),
                Vec3::new(0.5, 1.0, 4.5),
                Vec3::new(-0.5, 1.0, 4.5),
            ],
        ),
    ]
}

fn main() -> Result<()> {
    init_logging()?;

    let meshes = gallery_hall();
    let mut pending_surface = extract_walk_proxy(&meshes)?;

    let mut viewer = Viewer::with_default_config();
    tracing::info!(frames = FRAME_COUNT, "starting scripted walkthrough");

    for frame in 0..FRAME_COUNT {
        let t = frame as f64 * FRAME_DT;

        // Input script: right hand walks first, then the left takes over
        // after a short pause.
        match frame {
            30 => viewer.on_select_start(1),
            360 => viewer.on_select_end(1),
            400 => viewer.on_select_start(0),
            _ => {}
        }

        // The proxy arrives a beat after travel starts, so the first few
        // steps dead-reckon the way they would during a slow scene load.
        if frame == 45 {
            if let Some(surface) = pending_surface.take() {
                viewer.attach_collision_surface(surface);
            }
        }

        let t_s = t as f32;
        let head = Pose::new(
            Vec3::new(0.0, 1.6, 0.0),
            Quat::from_rotation_y(0.6 * (0.5 * t_s).sin()),
        );

        let report = viewer.on_frame(&FrameSnapshot {
            timestamp_s: t,
            presenting: true,
            head,
        });

        if frame % 90 == 0 {
            let p = viewer.dolly().position;
            tracing::info!(
                frame,
                x = p.x,
                y = p.y,
                z = p.z,
                traveling = report.step.is_some(),
                "dolly"
            );
        }
    }

    let p = viewer.dolly().position;
    tracing::info!(x = p.x, y = p.y, z = p.z, "walkthrough finished");

    Ok(())
}
