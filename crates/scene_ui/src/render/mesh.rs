//! Polygon meshes for 2D widgets
//!
//! A `Mesh` is a list of polygons sharing one primitive type. Every data array
//! (positions, texture coordinates) carries a dirty bit; the backend re-uploads
//! the array when it is pushed while dirty.

use bitflags::bitflags;

/// Vertex with position and texture coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadVertex {
    /// Position in local space
    pub position: [f32; 3],
    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl QuadVertex {
    /// Create a vertex
    pub const fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, z],
            tex_coord: [u, v],
        }
    }

    /// Move the vertex, keeping its texture coordinate
    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.position = [x, y, z];
    }

    /// Change the texture coordinate
    pub fn set_tex_coord(&mut self, u: f32, v: f32) {
        self.tex_coord = [u, v];
    }
}

/// Primitive type of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshType {
    /// Four vertices per polygon
    Quad,
}

/// Which per-vertex data array to push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataArray {
    /// Vertex positions
    Vertex,
    /// Texture coordinates
    TexCoord,
}

impl DataArray {
    /// Dirty bit for this array
    pub const fn dirty_flag(self) -> DirtyArrays {
        match self {
            Self::Vertex => DirtyArrays::VERTEX,
            Self::TexCoord => DirtyArrays::TEX_COORD,
        }
    }
}

bitflags! {
    /// Data arrays that need re-upload before the next draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirtyArrays: u8 {
        /// Vertex positions changed
        const VERTEX = 0b0000_0001;
        /// Texture coordinates changed
        const TEX_COORD = 0b0000_0010;
    }
}

/// An ordered set of vertices forming one face
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<QuadVertex>,
}

impl Polygon {
    /// Create an empty polygon
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex with texture coordinate
    pub fn add_vertex(&mut self, x: f32, y: f32, z: f32, u: f32, v: f32) {
        self.vertices.push(QuadVertex::new(x, y, z, u, v));
    }

    /// Vertex by index
    pub fn vertex(&self, index: usize) -> Option<&QuadVertex> {
        self.vertices.get(index)
    }

    /// Mutable vertex by index
    pub fn vertex_mut(&mut self, index: usize) -> Option<&mut QuadVertex> {
        self.vertices.get_mut(index)
    }

    /// All vertices
    pub fn vertices(&self) -> &[QuadVertex] {
        &self.vertices
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl Polygon {
    /// Centered `width x height` rectangle with full-texture coordinates
    ///
    /// Vertex order: (-w/2,-h/2) (w/2,-h/2) (w/2,h/2) (-w/2,h/2).
    pub fn rect(width: f32, height: f32) -> Self {
        let whalf = width / 2.0;
        let hhalf = height / 2.0;
        let mut poly = Self::new();
        poly.add_vertex(-whalf, -hhalf, 0.0, 0.0, 0.0);
        poly.add_vertex(-whalf + width, -hhalf, 0.0, 1.0, 0.0);
        poly.add_vertex(-whalf + width, -hhalf + height, 0.0, 1.0, 1.0);
        poly.add_vertex(-whalf, -hhalf + height, 0.0, 0.0, 1.0);
        poly
    }

    /// Move the first four vertices to a centered `width x height` rectangle
    pub fn set_rect_positions(&mut self, width: f32, height: f32) {
        let whalf = width / 2.0;
        let hhalf = height / 2.0;
        let corners = [
            (-whalf, -hhalf),
            (-whalf + width, -hhalf),
            (-whalf + width, -hhalf + height),
            (-whalf, -hhalf + height),
        ];
        for (vertex, (x, y)) in self.vertices.iter_mut().zip(corners) {
            vertex.set(x, y, 0.0);
        }
    }
}

/// Mesh made of polygons
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    mesh_type: MeshType,
    polygons: Vec<Polygon>,
    dirty: DirtyArrays,
}

impl Mesh {
    /// Single-quad mesh, see `Polygon::rect`
    pub fn quad(width: f32, height: f32) -> Self {
        let mut mesh = Self::new(MeshType::Quad);
        mesh.add_polygon(Polygon::rect(width, height));
        mesh
    }

    /// Create an empty mesh
    pub fn new(mesh_type: MeshType) -> Self {
        Self {
            mesh_type,
            polygons: Vec::new(),
            dirty: DirtyArrays::empty(),
        }
    }

    /// Primitive type
    pub fn mesh_type(&self) -> MeshType {
        self.mesh_type
    }

    /// Add a polygon; all arrays become dirty
    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
        self.dirty = DirtyArrays::all();
    }

    /// Polygon by index
    pub fn polygon(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// Mutable polygon by index; dirty bits are the caller's responsibility
    pub fn polygon_mut(&mut self, index: usize) -> Option<&mut Polygon> {
        self.polygons.get_mut(index)
    }

    /// Number of polygons
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Mark arrays as needing re-upload
    pub fn mark_dirty(&mut self, arrays: DirtyArrays) {
        self.dirty |= arrays;
    }

    /// Arrays currently needing re-upload
    pub fn dirty(&self) -> DirtyArrays {
        self.dirty
    }

    /// Clear dirty bits after upload
    pub fn clear_dirty(&mut self, arrays: DirtyArrays) {
        self.dirty.remove(arrays);
    }

    /// Flattened positions (xyz per vertex, polygon order)
    pub fn vertex_array(&self) -> Vec<f32> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.iter().flat_map(|v| v.position))
            .collect()
    }

    /// Flattened texture coordinates (uv per vertex, polygon order)
    pub fn tex_coord_array(&self) -> Vec<f32> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.iter().flat_map(|v| v.tex_coord))
            .collect()
    }

    /// Flattened data for one array
    pub fn data_array(&self, array: DataArray) -> Vec<f32> {
        match array {
            DataArray::Vertex => self.vertex_array(),
            DataArray::TexCoord => self.tex_coord_array(),
        }
    }
}
