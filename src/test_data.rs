#[cfg(test)]
pub const BLOGS_JSON: &str = r#"{
  "data": [
    {
      "id": 1,
      "documentId": "b1doc",
      "createdAt": "2025-09-01T10:00:00.000Z",
      "updatedAt": "2025-09-09T10:00:00.000Z",
      "publishedAt": "2025-09-10T08:30:00.000Z",
      "title": "Weaving Light Through Fog",
      "slug": "weaving-light-through-fog",
      "description": "A meditation on photographing the coast before sunrise.",
      "published": "2025-09-10",
      "isPublished": true,
      "content": [
        {
          "type": "heading",
          "level": 2,
          "children": [{ "type": "text", "text": "Before dawn" }]
        },
        {
          "type": "paragraph",
          "children": [
            { "type": "text", "text": "The fog arrives " },
            { "type": "text", "text": "first", "italic": true },
            { "type": "text", "text": "." }
          ]
        }
      ],
      "cover": {
        "id": 31,
        "url": "/uploads/fog.jpg",
        "alternativeText": "Fog over water",
        "caption": "",
        "formats": {
          "thumbnail": { "url": "/uploads/thumbnail_fog.jpg" },
          "small": { "url": "/uploads/small_fog.jpg" },
          "large": { "url": "/uploads/large_fog.jpg" }
        }
      },
      "author": {
        "id": 10,
        "documentId": "a10doc",
        "name": "Mara Quill",
        "email": "mara@example.com",
        "bio": "Writes about light, lenses and long walks."
      },
      "category": { "id": 100, "documentId": "c100doc", "name": "Technology", "slug": "tech" },
      "tags": [
        { "id": 201, "documentId": "t201doc", "name": "Silk", "slug": "silk" },
        { "id": 202, "documentId": "t202doc", "name": "Craft", "slug": "craft" }
      ]
    },
    {
      "id": 2,
      "documentId": "b2doc",
      "title": "Slow Mornings",
      "slug": "slow-mornings",
      "description": "Why the first hour of the day deserves protecting.",
      "published": "2025-08-02",
      "isPublished": true,
      "content": [
        {
          "type": "paragraph",
          "children": [{ "type": "text", "text": "Keep the phone in another room." }]
        }
      ],
      "cover": {
        "url": "/uploads/mornings.jpg",
        "alternativeText": "Coffee on a windowsill",
        "formats": { "small": { "url": "/uploads/small_mornings.jpg" } }
      },
      "author": {
        "id": 11,
        "documentId": "a11doc",
        "name": "Jonas Reed",
        "bio": "Travels slowly, writes slower."
      },
      "category": { "id": 101, "documentId": "c101doc", "name": "Life", "slug": "life" },
      "tags": [{ "id": 203, "documentId": "t203doc", "name": "Travel", "slug": "travel" }]
    },
    {
      "id": 3,
      "documentId": "b3doc",
      "title": "Rust for Quiet Minds",
      "slug": "rust-for-quiet-minds",
      "description": "Learning a systems language without the hurry.",
      "published": "2025-07-19",
      "isPublished": true,
      "content": [
        {
          "type": "paragraph",
          "children": [
            { "type": "text", "text": "Start with " },
            { "type": "text", "text": "ownership", "code": true },
            { "type": "text", "text": " and stay there a while." }
          ]
        }
      ],
      "cover": {
        "url": "/uploads/rust.jpg",
        "alternativeText": "Rusted hinge",
        "formats": {
          "thumbnail": { "url": "/uploads/thumbnail_rust.jpg" },
          "small": { "url": "/uploads/small_rust.jpg" }
        }
      },
      "author": {
        "id": 10,
        "documentId": "a10doc",
        "name": "Mara Quill",
        "email": "mara@example.com",
        "bio": "Writes about light, lenses and long walks."
      },
      "category": { "id": 100, "documentId": "c100doc", "name": "Technology", "slug": "tech" },
      "tags": [
        { "id": 204, "documentId": "t204doc", "name": "Rust", "slug": "rust" },
        { "id": 202, "documentId": "t202doc", "name": "Craft", "slug": "craft" }
      ]
    },
    {
      "id": 4,
      "documentId": "b4doc",
      "title": "Packing for Nowhere",
      "slug": "packing-for-nowhere",
      "description": "A bag, a notebook, and no destination at all.",
      "published": "2025-06-30",
      "isPublished": true,
      "content": [],
      "author": {
        "id": 11,
        "documentId": "a11doc",
        "name": "Jonas Reed",
        "bio": "Travels slowly, writes slower."
      },
      "tags": [{ "id": 203, "documentId": "t203doc", "name": "Travel", "slug": "travel" }]
    },
    {
      "id": 5,
      "documentId": "b5doc",
      "title": "Letters to a Machine",
      "slug": "letters-to-a-machine",
      "description": "Notes written to the compiler, and what it wrote back.",
      "published": "2025-05-11",
      "isPublished": false,
      "content": [
        {
          "type": "paragraph",
          "children": [{ "type": "text", "text": "Dear rustc," }]
        }
      ],
      "cover": {
        "url": "/uploads/letters.jpg",
        "alternativeText": "Typewriter keys"
      },
      "author": { "id": 12, "documentId": "a12doc", "name": "Priya Anand" },
      "category": { "id": 102, "documentId": "c102doc", "name": "Art", "slug": "art" },
      "tags": [{ "id": 204, "documentId": "t204doc", "name": "Rust", "slug": "rust" }]
    }
  ],
  "meta": {
    "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 5 }
  }
}"#;

#[cfg(test)]
pub const AUTHORS_JSON: &str = r#"{
  "data": [
    {
      "id": 10,
      "documentId": "a10doc",
      "name": "Mara Quill",
      "email": "mara@example.com",
      "bio": "Writes about light, lenses and long walks.",
      "avatar": {
        "id": 41,
        "url": "/uploads/mara.jpg",
        "alternativeText": "Mara Quill",
        "formats": {
          "thumbnail": { "url": "/uploads/thumbnail_mara.jpg" },
          "small": { "url": "/uploads/small_mara.jpg" }
        }
      }
    },
    {
      "id": 11,
      "documentId": "a11doc",
      "name": "Jonas Reed",
      "email": "jonas@example.com",
      "bio": "Travels slowly, writes slower."
    },
    {
      "id": 12,
      "documentId": "a12doc",
      "name": "Priya Anand",
      "email": "priya@example.com",
      "bio": "Poetry for compilers.",
      "avatar": { "url": "/uploads/priya.jpg" }
    }
  ],
  "meta": {
    "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 3 }
  }
}"#;

#[cfg(test)]
pub const DOCUMENT_JSON: &str = r#"[
  {
    "type": "heading",
    "level": 2,
    "children": [{ "type": "text", "text": "On silk and software" }]
  },
  {
    "type": "paragraph",
    "children": [
      { "type": "text", "text": "Good threads are " },
      { "type": "text", "text": "strong", "bold": true },
      { "type": "text", "text": " and " },
      { "type": "text", "text": "fine", "italic": true },
      { "type": "text", "text": ", like " },
      {
        "type": "link",
        "url": "https://example.com/threads",
        "children": [{ "type": "text", "text": "these" }]
      },
      { "type": "text", "text": "." }
    ]
  },
  {
    "type": "list",
    "format": "unordered",
    "children": [
      {
        "type": "list-item",
        "children": [{ "type": "text", "text": "spin" }]
      },
      {
        "type": "list-item",
        "children": [
          { "type": "text", "text": "weave" },
          {
            "type": "list",
            "format": "ordered",
            "children": [
              {
                "type": "list-item",
                "children": [{ "type": "text", "text": "warp" }]
              },
              {
                "type": "list-item",
                "children": [{ "type": "text", "text": "weft" }]
              }
            ]
          }
        ]
      }
    ]
  },
  {
    "type": "quote",
    "children": [{ "type": "text", "text": "Measure twice, weave once." }]
  },
  {
    "type": "code",
    "children": [{ "type": "text", "text": "fn weave(threads: &[Thread]) -> Cloth { todo!() }" }]
  },
  {
    "type": "image",
    "image": {
      "url": "/uploads/loom.jpg",
      "alternativeText": "A wooden loom",
      "caption": "The loom at rest",
      "formats": { "large": { "url": "/uploads/large_loom.jpg" } }
    }
  },
  { "type": "embed", "provider": "youtube", "url": "https://youtu.be/x" },
  {
    "type": "heading",
    "level": 7,
    "children": [{ "type": "text", "text": "Too deep to mean anything" }]
  }
]"#;
