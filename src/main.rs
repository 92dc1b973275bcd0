// src/main.rs
use nannou::prelude::*;
use rand::Rng;

use craftvis::{
    config::Config,
    draw::{controls, icon, Node, Styles},
    models::GameData,
    render,
    services::SpriteSheet,
};

struct Model {
    // Game data & atlas:
    data: GameData,
    sheet: SpriteSheet,
    sheet_texture: wgpu::Texture,

    // Presentation:
    styles: Styles,
    panel: Node,
    background: u32,
    face_scale: u32,

    // Recipe selection:
    recipe_names: Vec<String>,
    selected: usize,
    random: rand::rngs::ThreadRng,
}

fn main() {
    nannou::app(model).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load game data & sheet index
    let data = GameData::load(config.resolve_data_path()).expect("Failed to load game data");
    let sheet =
        SpriteSheet::load(config.resolve_sheet_index_path()).expect("Failed to load sheet index");

    // Create window
    let window_id = app
        .new_window()
        .title("craftvis 0.2.1")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();
    let window = app.window(window_id).unwrap();

    let sheet_texture = wgpu::Texture::from_path(&window, config.resolve_sheet_image_path())
        .expect("Failed to load sheet image");

    let mut recipe_names: Vec<String> = data.recipes.keys().cloned().collect();
    recipe_names.sort();
    println!("Loaded {} recipes", recipe_names.len());

    let styles = Styles::default();
    let panel = build_panel(
        &data,
        &sheet,
        &styles,
        recipe_names.first().map(String::as_str),
        config.panel.background,
        config.panel.face_scale,
    );

    Model {
        data,
        sheet,
        sheet_texture,
        styles,
        panel,
        background: config.panel.background,
        face_scale: config.panel.face_scale,
        recipe_names,
        selected: 0,
        random: rand::thread_rng(),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if model.recipe_names.is_empty() {
        return;
    }
    match key {
        Key::Right => {
            model.selected = (model.selected + 1) % model.recipe_names.len();
            rebuild_panel(model);
        }
        Key::Left => {
            model.selected =
                (model.selected + model.recipe_names.len() - 1) % model.recipe_names.len();
            rebuild_panel(model);
        }
        // jump somewhere random
        Key::R => {
            model.selected = model.random.gen_range(0..model.recipe_names.len());
            rebuild_panel(model);
        }
        _ => (),
    }
}

fn rebuild_panel(model: &mut Model) {
    model.panel = build_panel(
        &model.data,
        &model.sheet,
        &model.styles,
        model.recipe_names.get(model.selected).map(String::as_str),
        model.background,
        model.face_scale,
    );
}

// A control face with a pressed inner strip and the recipe row on top.
fn build_panel(
    data: &GameData,
    sheet: &SpriteSheet,
    styles: &Styles,
    name: Option<&str>,
    background: u32,
    face_scale: u32,
) -> Node {
    let mut panel = Node::group();

    let Some(name) = name else {
        return panel;
    };
    let Some(recipe) = data.recipe(name) else {
        return panel;
    };

    let row_width = 36.0 * (recipe.ingredients.len() + recipe.results.len()) as f32 + 120.0;
    let face = controls::control_face(
        row_width,
        56.0,
        face_scale,
        background,
        1.0,
        [15.0, 7.5, -7.5, -15.0],
    );
    panel.push(face);

    let mut strip = controls::bordered_rect(row_width - 16.0, 44.0, background, 1.0, 2, true);
    strip.position = pt2(8.0, 6.0);
    panel.push(strip);

    // clone the lists out so the panel borrows nothing from the model
    let ingredients = recipe.ingredients.clone();
    let results = recipe.results.clone();
    let time = recipe.time;
    if let Err(err) = icon::create_recipe(
        &mut panel, data, sheet, styles, 14.0, 12.0, &ingredients, &results, time,
    ) {
        println!("Skipping recipe {}: {}", name, err);
    }
    panel
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(rgb(0.12, 0.12, 0.12));

    let rect = app.window_rect();
    let origin = pt2(rect.left() + 24.0, rect.top() - 48.0);
    render::draw_node(
        &draw,
        &model.panel,
        origin,
        &model.sheet_texture,
        model.sheet.dimensions(),
    );

    if let Some(name) = model.recipe_names.get(model.selected) {
        draw.text(name)
            .font_size(16)
            .color(WHITE)
            .x_y(rect.left() + 120.0, rect.top() - 24.0);
    }

    draw.to_frame(app, &frame).unwrap();
}
