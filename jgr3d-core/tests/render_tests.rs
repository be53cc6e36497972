/// End-to-end tests: OBJ text in, jgraph text out
use jgr3d_core::obj::parse_obj_str;
use jgr3d_core::{Error, JgraphWriter, Mesh, Pipeline, PipelineConfig, TriangleOutcome};

/// Unit cube on [0, 1]^3, counter-clockwise from outside
const UNIT_CUBE: &str = "\
# unit cube
v 0.0 0.0 0.0
v 0.0 0.0 1.0
v 0.0 1.0 0.0
v 0.0 1.0 1.0
v 1.0 0.0 0.0
v 1.0 0.0 1.0
v 1.0 1.0 0.0
v 1.0 1.0 1.0
vn 0 0 -1
f 1//1 7//1 5//1
f 1//1 3//1 7//1
f 1//1 4//1 3//1
f 1//1 2//1 4//1
f 3//1 8//1 7//1
f 3//1 4//1 8//1
f 5//1 7//1 8//1
f 5//1 8//1 6//1
f 1//1 5//1 6//1
f 1//1 6//1 2//1
f 2//1 6//1 8//1
f 2//1 8//1 4//1
";

fn render(mesh: &Mesh, config: PipelineConfig) -> (String, jgr3d_core::RenderStats) {
    let pipeline = Pipeline::new(&config).unwrap();
    let mut writer = JgraphWriter::new(Vec::new());
    let stats = pipeline.render(mesh, &mut writer).unwrap();
    (String::from_utf8(writer.into_inner()).unwrap(), stats)
}

fn polygon_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|l| l.starts_with("newline poly linethickness"))
        .collect()
}

#[test]
fn test_unit_cube_front_face_only() {
    let mesh = parse_obj_str(UNIT_CUBE).unwrap();
    assert_eq!(mesh.len(), 12);

    let (output, stats) = render(&mesh, PipelineConfig::new(0.0, 0.0, 3.0));

    // Looking straight at the z = 0 face; side faces are edge-on and culled
    assert_eq!(stats.emitted, 2);
    assert!(stats.emitted <= mesh.len() / 2);
    assert_eq!(polygon_lines(&output).len(), stats.emitted);

    // Background polygon plus one per visible triangle
    let all_polys = output.lines().filter(|l| l.starts_with("newline poly")).count();
    assert_eq!(all_polys, stats.emitted + 1);

    // Face normal points straight at the light
    for line in polygon_lines(&output) {
        assert!(line.contains("pfill 1.000000 "), "{line}");
    }
}

#[test]
fn test_rotated_cube_shows_three_faces() {
    let (output, stats) = render(&Mesh::cube(2.0), PipelineConfig::new(30.0, 45.0, 5.0));

    assert_eq!(stats.emitted, 6);
    assert_eq!(stats.culled, 6);

    for line in polygon_lines(&output) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let fill: f32 = fields[7].parse().unwrap();
        assert!(fill > 0.0 && fill <= 1.0, "{line}");

        // Every projected vertex stays on the 100x100 canvas
        for value in &fields[9..] {
            let v: f32 = value.parse().unwrap();
            assert!((0.0..=100.0).contains(&v), "{line}");
        }
    }
}

#[test]
fn test_output_follows_mesh_order() {
    let mesh = Mesh::cube(2.0);
    let pipeline = Pipeline::new(&PipelineConfig::new(30.0, 45.0, 5.0)).unwrap();

    let visible: Vec<usize> = mesh
        .triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| matches!(pipeline.process_triangle(t), TriangleOutcome::Visible(_)))
        .map(|(i, _)| i)
        .collect();

    let mut sorted = visible.clone();
    sorted.sort_unstable();
    assert_eq!(visible, sorted);
    assert_eq!(pipeline.visible_triangles(&mesh).count(), visible.len());
}

#[test]
fn test_degenerate_faces_are_not_emitted() {
    let input = "v 0 0 0\nv 1 0 0\nv 2 0 0\nv 0 1 0\nf 1 2 3\nf 1 4 2\n";
    let mesh = parse_obj_str(input).unwrap();

    let (output, stats) = render(&mesh, PipelineConfig::new(0.0, 0.0, 5.0));
    assert_eq!(stats.degenerate, 1);
    assert_eq!(stats.emitted, 1);
    assert_eq!(polygon_lines(&output).len(), 1);
    assert!(!output.contains("NaN"));
}

#[test]
fn test_invalid_face_reference_is_fatal() {
    let err = parse_obj_str("v 0 0 0\nv 1 0 0\nf 1 2 9\n").unwrap_err();
    assert!(matches!(err, Error::InvalidFaceReference { ref index, .. } if index == "9"));
    assert!(err.to_string().contains("invalid face reference"));
}
