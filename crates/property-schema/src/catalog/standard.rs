use super::domain::{AmenityDescriptor, Category, CategorySchema, FieldDescriptor};

/// Revision of the hand-authored catalog. Bump whenever a descriptor changes so
/// client and server copies can detect drift.
pub const STANDARD_CATALOG_VERSION: u32 = 1;

pub(crate) fn standard_schemas() -> Vec<CategorySchema> {
    vec![
        CategorySchema {
            category: Category::from("HOUSE"),
            label: "Casa".to_string(),
            description: "Vivienda unifamiliar independiente con terreno propio.".to_string(),
            fields: vec![
                FieldDescriptor::integer("dormitorios", "Dormitorios")
                    .required()
                    .min(1.0)
                    .max(10.0),
                FieldDescriptor::integer("banos", "Baños")
                    .required()
                    .min(1.0)
                    .max(8.0),
                FieldDescriptor::integer("pisos", "Número de pisos")
                    .min(1.0)
                    .max(5.0),
                FieldDescriptor::decimal("area_construida", "Área construida")
                    .required()
                    .min(20.0)
                    .unit("m²")
                    .placeholder("Ej. 120"),
                FieldDescriptor::decimal("area_terreno", "Área de terreno")
                    .min(20.0)
                    .unit("m²"),
                FieldDescriptor::integer("antiguedad", "Antigüedad")
                    .min(0.0)
                    .max(100.0)
                    .unit("años"),
                FieldDescriptor::boolean("garage", "Garaje"),
                FieldDescriptor::integer("estacionamientos", "Estacionamientos")
                    .min(0.0)
                    .max(10.0),
                FieldDescriptor::enumerated(
                    "estado_conservacion",
                    "Estado de conservación",
                    &[
                        ("nuevo", "Nuevo"),
                        ("bueno", "Bueno"),
                        ("regular", "Regular"),
                        ("a_remodelar", "A remodelar"),
                    ],
                ),
            ],
            amenities: vec![
                AmenityDescriptor::new("piscina", "Piscina"),
                AmenityDescriptor::new("jardin", "Jardín"),
                AmenityDescriptor::new("terraza", "Terraza"),
                AmenityDescriptor::new("parrilla", "Zona de parrilla"),
                AmenityDescriptor::new("lavanderia", "Lavandería"),
                AmenityDescriptor::new("seguridad", "Seguridad 24h"),
                AmenityDescriptor::new("agua", "Agua potable"),
                AmenityDescriptor::new("luz", "Electricidad"),
                AmenityDescriptor::new("gas", "Gas natural"),
                AmenityDescriptor::new("internet", "Internet"),
            ],
        },
        CategorySchema {
            category: Category::from("APARTMENT"),
            label: "Departamento".to_string(),
            description: "Unidad de vivienda dentro de un edificio multifamiliar.".to_string(),
            fields: vec![
                FieldDescriptor::integer("dormitorios", "Dormitorios")
                    .required()
                    .min(1.0)
                    .max(6.0),
                FieldDescriptor::integer("banos", "Baños")
                    .required()
                    .min(1.0)
                    .max(5.0),
                FieldDescriptor::decimal("area", "Área")
                    .required()
                    .min(10.0)
                    .unit("m²")
                    .placeholder("Ej. 65.5"),
                FieldDescriptor::integer("piso", "Piso de ubicación")
                    .min(0.0)
                    .max(60.0),
                FieldDescriptor::boolean("ascensor", "Ascensor"),
                FieldDescriptor::boolean("amoblado", "Amoblado"),
                FieldDescriptor::boolean("cochera", "Cochera"),
                FieldDescriptor::decimal("mantenimiento", "Cuota de mantenimiento")
                    .min(0.0)
                    .unit("S/"),
                FieldDescriptor::enumerated(
                    "vista",
                    "Vista",
                    &[("exterior", "Exterior"), ("interior", "Interior")],
                ),
            ],
            amenities: vec![
                AmenityDescriptor::new("gimnasio", "Gimnasio"),
                AmenityDescriptor::new("piscina", "Piscina"),
                AmenityDescriptor::new("area_comun", "Área común"),
                AmenityDescriptor::new("seguridad", "Seguridad 24h"),
                AmenityDescriptor::new("lavanderia", "Lavandería"),
                AmenityDescriptor::new("terraza", "Terraza"),
                AmenityDescriptor::new("internet", "Internet"),
                AmenityDescriptor::new("agua", "Agua potable"),
                AmenityDescriptor::new("luz", "Electricidad"),
            ],
        },
        CategorySchema {
            category: Category::from("LAND"),
            label: "Terreno".to_string(),
            description: "Lote sin edificar para uso residencial, comercial o agrícola."
                .to_string(),
            fields: vec![
                FieldDescriptor::decimal("area", "Área")
                    .required()
                    .min(50.0)
                    .unit("m²"),
                FieldDescriptor::decimal("frente", "Frente").min(1.0).unit("m"),
                FieldDescriptor::decimal("fondo", "Fondo").min(1.0).unit("m"),
                FieldDescriptor::enumerated(
                    "topografia",
                    "Topografía",
                    &[
                        ("plano", "Plano"),
                        ("inclinado", "Inclinado"),
                        ("escarpado", "Escarpado"),
                    ],
                )
                .required(),
                FieldDescriptor::enumerated(
                    "uso_suelo",
                    "Uso de suelo",
                    &[
                        ("residencial", "Residencial"),
                        ("comercial", "Comercial"),
                        ("agricola", "Agrícola"),
                        ("industrial", "Industrial"),
                    ],
                ),
                FieldDescriptor::text("referencia", "Referencia de acceso")
                    .placeholder("Ej. a 200 m de la carretera"),
            ],
            amenities: vec![
                AmenityDescriptor::new("agua", "Agua potable"),
                AmenityDescriptor::new("luz", "Electricidad"),
                AmenityDescriptor::new("desague", "Desagüe"),
                AmenityDescriptor::new("acceso_vehicular", "Acceso vehicular"),
                AmenityDescriptor::new("cerco_perimetrico", "Cerco perimétrico"),
            ],
        },
        CategorySchema {
            category: Category::from("OFFICE"),
            label: "Oficina".to_string(),
            description: "Espacio de trabajo en edificio corporativo o mixto.".to_string(),
            fields: vec![
                FieldDescriptor::decimal("area", "Área")
                    .required()
                    .min(10.0)
                    .unit("m²"),
                FieldDescriptor::integer("ambientes", "Ambientes")
                    .required()
                    .min(1.0)
                    .max(50.0),
                FieldDescriptor::integer("banos", "Baños").min(0.0).max(20.0),
                FieldDescriptor::integer("piso", "Piso de ubicación")
                    .min(0.0)
                    .max(80.0),
                FieldDescriptor::boolean("amoblado", "Amoblado"),
                FieldDescriptor::integer("estacionamientos", "Estacionamientos")
                    .min(0.0)
                    .max(50.0),
            ],
            amenities: vec![
                AmenityDescriptor::new("recepcion", "Recepción"),
                AmenityDescriptor::new("sala_reuniones", "Sala de reuniones"),
                AmenityDescriptor::new("aire_acondicionado", "Aire acondicionado"),
                AmenityDescriptor::new("seguridad", "Seguridad 24h"),
                AmenityDescriptor::new("ascensor", "Ascensor"),
                AmenityDescriptor::new("internet", "Internet"),
                AmenityDescriptor::new("estacionamiento_visitas", "Estacionamiento de visitas"),
            ],
        },
        CategorySchema {
            category: Category::from("ROOM"),
            label: "Cuarto".to_string(),
            description: "Habitación individual dentro de una vivienda compartida.".to_string(),
            fields: vec![
                FieldDescriptor::decimal("area", "Área").min(4.0).unit("m²"),
                FieldDescriptor::integer("capacidad", "Capacidad")
                    .required()
                    .min(1.0)
                    .max(4.0)
                    .unit("personas"),
                FieldDescriptor::boolean("bano_privado", "Baño privado").required(),
                FieldDescriptor::boolean("amoblado", "Amoblado"),
            ],
            amenities: vec![
                AmenityDescriptor::new("wifi", "Wi-Fi"),
                AmenityDescriptor::new("agua", "Agua potable"),
                AmenityDescriptor::new("luz", "Electricidad"),
                AmenityDescriptor::new("cocina_compartida", "Cocina compartida"),
                AmenityDescriptor::new("lavanderia", "Lavandería"),
                AmenityDescriptor::new("cable", "Televisión por cable"),
            ],
        },
        CategorySchema {
            category: Category::from("COMMERCIAL"),
            label: "Local comercial".to_string(),
            description: "Espacio a pie de calle o en galería destinado a comercio.".to_string(),
            fields: vec![
                FieldDescriptor::decimal("area", "Área")
                    .required()
                    .min(10.0)
                    .unit("m²"),
                FieldDescriptor::decimal("frente", "Frente").min(1.0).unit("m"),
                FieldDescriptor::integer("banos", "Baños").min(0.0).max(10.0),
                FieldDescriptor::enumerated(
                    "ubicacion",
                    "Ubicación",
                    &[
                        ("calle", "A pie de calle"),
                        ("centro_comercial", "Centro comercial"),
                        ("galeria", "Galería"),
                    ],
                )
                .required(),
                FieldDescriptor::decimal("altura_techo", "Altura de techo")
                    .min(2.0)
                    .max(15.0)
                    .unit("m"),
            ],
            amenities: vec![
                AmenityDescriptor::new("vitrina", "Vitrina"),
                AmenityDescriptor::new("deposito", "Depósito"),
                AmenityDescriptor::new("seguridad", "Seguridad 24h"),
                AmenityDescriptor::new("estacionamiento", "Estacionamiento"),
                AmenityDescriptor::new("agua", "Agua potable"),
                AmenityDescriptor::new("luz", "Electricidad"),
            ],
        },
        CategorySchema {
            category: Category::from("WAREHOUSE"),
            label: "Almacén".to_string(),
            description: "Nave o depósito para almacenamiento y logística.".to_string(),
            fields: vec![
                FieldDescriptor::decimal("area", "Área")
                    .required()
                    .min(50.0)
                    .unit("m²"),
                FieldDescriptor::decimal("altura", "Altura libre")
                    .min(3.0)
                    .max(30.0)
                    .unit("m"),
                FieldDescriptor::integer("andenes_carga", "Andenes de carga")
                    .min(0.0)
                    .max(20.0),
                FieldDescriptor::boolean("acceso_trailer", "Acceso para tráiler"),
                FieldDescriptor::enumerated(
                    "piso_industrial",
                    "Tipo de piso",
                    &[
                        ("concreto", "Concreto"),
                        ("epoxico", "Epóxico"),
                        ("tierra", "Tierra compactada"),
                    ],
                ),
            ],
            amenities: vec![
                AmenityDescriptor::new("seguridad", "Seguridad 24h"),
                AmenityDescriptor::new("oficinas", "Oficinas administrativas"),
                AmenityDescriptor::new("vestuarios", "Vestuarios"),
                AmenityDescriptor::new("agua", "Agua potable"),
                AmenityDescriptor::new("luz", "Electricidad"),
                AmenityDescriptor::new("trifasica", "Conexión trifásica"),
            ],
        },
    ]
}
