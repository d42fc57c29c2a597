use bevy::prelude::*;
use bevy::render::mesh::Indices;

use geometry::height_field::{HeightField, SampleGrid};
use geometry::plane::PlaneParams;

use crate::coords;

/// Marker for the single plane surface entity.
#[derive(Component)]
pub struct PlaneSurface;

const SURFACE_COLOR: Color = Color::srgba(0.53, 0.81, 0.92, 0.5);
const WIREFRAME_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.8);

pub fn spawn_surface(
    mut commands: Commands,
    params: Res<PlaneParams>,
    grid: Res<SampleGrid>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let field = HeightField::compute(&params, &grid);
    let mesh = build_surface_mesh(&grid, &field, surface_normal(&params));

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SURFACE_COLOR,
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
        PlaneSurface,
    ));
}

/// Replace the surface mesh in place whenever the parameters change.
///
/// The mesh handle stays stable; only the asset behind it is swapped, so
/// nothing is despawned or rescanned.
pub fn rebuild_surface(
    params: Res<PlaneParams>,
    grid: Res<SampleGrid>,
    query: Query<&Mesh3d, With<PlaneSurface>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !params.is_changed() {
        return;
    }
    let Ok(mesh_handle) = query.get_single() else {
        return;
    };
    let field = HeightField::compute(&params, &grid);
    let mesh = build_surface_mesh(&grid, &field, surface_normal(&params));
    meshes.insert(&mesh_handle.0, mesh);
}

/// Grid lines over the surface, matching the sample spacing.
pub fn draw_surface_wireframe(
    params: Res<PlaneParams>,
    grid: Res<SampleGrid>,
    mut gizmos: Gizmos,
) {
    let at = |x: f32, y: f32| coords::world_pos(x, y, params.height_at(x, y));

    for &y in grid.ys() {
        for pair in grid.xs().windows(2) {
            gizmos.line(at(pair[0], y), at(pair[1], y), WIREFRAME_COLOR);
        }
    }
    for &x in grid.xs() {
        for pair in grid.ys().windows(2) {
            gizmos.line(at(x, pair[0]), at(x, pair[1]), WIREFRAME_COLOR);
        }
    }
}

/// Unit surface normal in world space, oriented upward for stable lighting.
pub fn surface_normal(params: &PlaneParams) -> Vec3 {
    // safe_c keeps the vector nonzero even when the user drives C to zero
    let n = coords::to_world(Vec3::new(params.a, params.b, params.safe_c())).normalize();
    if n.y < 0.0 {
        -n
    } else {
        n
    }
}

/// Triangulate the height field: one vertex per sample, two triangles per
/// grid cell, wound counter-clockwise seen from above.
pub fn build_surface_mesh(grid: &SampleGrid, field: &HeightField, normal: Vec3) -> Mesh {
    let w = field.width();
    let h = field.height();
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(w * h);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(w * h);
    let mut indices: Vec<u32> = Vec::with_capacity((w - 1) * (h - 1) * 6);

    for (iy, &y) in grid.ys().iter().enumerate() {
        for (ix, &x) in grid.xs().iter().enumerate() {
            let p = coords::world_pos(x, y, field.get(ix, iy));
            positions.push([p.x, p.y, p.z]);
            uvs.push([ix as f32 / (w - 1) as f32, iy as f32 / (h - 1) as f32]);
        }
    }

    let stride = w as u32;
    for iy in 0..h - 1 {
        for ix in 0..w - 1 {
            let vi = (iy * w + ix) as u32;
            indices.push(vi);
            indices.push(vi + stride);
            indices.push(vi + 1);
            indices.push(vi + 1);
            indices.push(vi + stride);
            indices.push(vi + stride + 1);
        }
    }

    let normals: Vec<[f32; 3]> = vec![normal.to_array(); positions.len()];

    Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        bevy::render::render_asset::RenderAssetUsages::RENDER_WORLD
            | bevy::render::render_asset::RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn mesh_for(params: &PlaneParams) -> (Mesh, SampleGrid, HeightField) {
        let grid = SampleGrid::default();
        let field = HeightField::compute(params, &grid);
        let mesh = build_surface_mesh(&grid, &field, surface_normal(params));
        (mesh, grid, field)
    }

    #[test]
    fn test_mesh_counts_match_grid() {
        let (mesh, grid, _) = mesh_for(&PlaneParams::default());
        let expected_vertices = grid.width() * grid.height();
        let expected_indices = (grid.width() - 1) * (grid.height() - 1) * 6;
        assert_eq!(mesh.count_vertices(), expected_vertices);
        assert_eq!(mesh.indices().map(Indices::len), Some(expected_indices));
    }

    #[test]
    fn test_vertex_heights_follow_field() {
        let params = PlaneParams::default();
        let (mesh, grid, field) = mesh_for(&params);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        for (iy, &y) in grid.ys().iter().enumerate() {
            for (ix, &x) in grid.xs().iter().enumerate() {
                let [px, py, pz] = positions[iy * grid.width() + ix];
                assert_eq!(px, x);
                assert_eq!(pz, y);
                assert_eq!(py, field.get(ix, iy));
            }
        }
    }

    #[test]
    fn test_surface_normal_is_unit_and_upward() {
        let cases = [
            PlaneParams::default(),
            PlaneParams {
                c: -2.0,
                ..PlaneParams::default()
            },
            PlaneParams {
                a: 0.0,
                b: 0.0,
                c: 0.0,
                ..PlaneParams::default()
            },
        ];
        for params in cases {
            let n = surface_normal(&params);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.y >= 0.0);
        }
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        let (mesh, grid, _) = mesh_for(&PlaneParams::default());
        let max = (grid.width() * grid.height()) as u32;
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("indices missing");
        };
        assert!(indices.iter().all(|&i| i < max));
    }
}
