pub mod data_model;

pub use data_model::{
    Fluid, GameData, IconDef, IconError, IconLayer, IconSource, IngredientOrResult,
    InventoryGroup, Item, Recipe, Signal, TintSpec,
};
