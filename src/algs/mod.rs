//! Re-export public algorithms.

pub mod ancestry;
pub mod parallel;
pub mod properties;
pub mod sides;
pub mod subtrees;

pub use ancestry::{lowest_common_ancestor, lowest_common_ancestors, path_to_root};
pub use properties::{
    belongs_to_link, belongs_to_node, degree, inner_edge_count, inner_edge_indices,
    inner_node_count, inner_node_indices, is_bifurcating, is_inner, is_inner_edge, is_inner_link,
    is_leaf, is_leaf_edge, is_leaf_link, is_root, is_rooted, leaf_edge_count, leaf_edge_indices,
    leaf_node_count, leaf_node_indices, max_degree, node_degrees,
};
pub use sides::{edge_sides, node_root_direction_matrix, sign_matrix};
pub use subtrees::{
    node_path_length_vector, subtree_max_path_height, subtree_max_path_heights,
    subtree_max_path_heights_from_root, subtree_size, subtree_sizes, subtree_sizes_from_root,
};
