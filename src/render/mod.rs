pub mod node_renderer;

pub use node_renderer::draw_node;
