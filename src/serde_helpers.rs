use crate::outline::{Node, NodeType};

pub(crate) fn serialize_nodes<S>(nodes: &Vec<Node>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let mut s = String::new();
    for node in nodes {
        s.push_str(&format!(
            "{} {} {} ",
            node.x,
            node.y,
            match node.nodetype {
                NodeType::Move => "m",
                NodeType::Line => "l",
                NodeType::OffCurve => "o",
                NodeType::Curve => "c",
            }
        ));
    }
    s.pop(); // Remove trailing space
    serializer.serialize_str(&s)
}

pub(crate) fn deserialize_nodes<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = serde::Deserialize::deserialize(deserializer)?;
    let mut nodes = Vec::new();
    let mut tokens = s.split_whitespace();
    while let Some(token) = tokens.next() {
        let x_str = token;
        let y_str = tokens
            .next()
            .ok_or_else(|| serde::de::Error::custom("Expected y coordinate"))?;
        let type_str = tokens
            .next()
            .ok_or_else(|| serde::de::Error::custom("Expected node type"))?;
        let x: f64 = x_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid x coordinate: {}", x_str)))?;
        let y: f64 = y_str
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid y coordinate: {}", y_str)))?;
        let nodetype = match type_str {
            "m" => NodeType::Move,
            "l" => NodeType::Line,
            "o" => NodeType::OffCurve,
            "c" => NodeType::Curve,
            _ => {
                return Err(serde::de::Error::custom(format!(
                    "Invalid node type: {}",
                    type_str
                )))
            }
        };
        nodes.push(Node { x, y, nodetype });
    }
    Ok(nodes)
}
