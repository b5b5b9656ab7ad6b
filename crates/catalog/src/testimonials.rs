use shared::domain::{Testimonial, TestimonialId};

pub(crate) fn all() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: TestimonialId(1),
            text: "The atmosphere is so cozy and inviting, and their house blend coffee is absolutely perfect. This has become my go-to spot for both work meetings and catching up with friends.".to_string(),
            name: "Sarah Johnson".to_string(),
            title: "Local Resident".to_string(),
            rating: 5.0,
        },
        Testimonial {
            id: TestimonialId(2),
            text: "I've tried many cafés in the area, but Aroma stands out for their attention to detail. Their avocado toast is incredibly fresh, and the latte art always brings a smile to my face.".to_string(),
            name: "David Williams".to_string(),
            title: "Food Blogger".to_string(),
            rating: 5.0,
        },
        Testimonial {
            id: TestimonialId(3),
            text: "As someone who works remotely, I appreciate the reliable WiFi and peaceful environment. The staff remembers my usual order and always makes me feel welcome. It's like my second home!".to_string(),
            name: "Emily Rodriguez".to_string(),
            title: "Freelance Designer".to_string(),
            rating: 4.5,
        },
    ]
}
