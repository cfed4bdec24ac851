// Static bodies served when a live page cannot be fetched.

pub(super) const CASA: &str = "CASA Drone Regulations in Australia:

RePL (Remote Pilot License):
- Required for commercial drone operations
- Must be at least 16 years old
- Pass theory exam and practical training
- Cost: $2,000 - $4,000 depending on provider
- Training duration: 2-4 weeks

ReOC (Remote Operator's Certificate):
- Required for drone businesses
- Demonstrates safety management systems
- Application process: 3-6 months
- Cost: $5,000 - $15,000

Safety Rules:
- Keep drone in visual line of sight
- Fly below 120 meters (400 feet)
- Keep 30 meters away from people
- No flying over populated areas without authorization
- 5.5km restriction near airports
- No night flying without approval
- Respect privacy and property rights

Insurance:
- Mandatory for commercial operations
- Public liability minimum $10 million recommended
- Annual cost: $500 - $3,000

For more information: https://www.casa.gov.au/drones";

pub(super) const GLOBAL_DRONE_SOLUTIONS: &str = "Global Drone Solutions Australia:

RePL Training:
- Price: $2,750 (all-inclusive)
- 3-day intensive course format
- Pre-course online theory modules
- Comprehensive practical flight training
- CASA examination fees included
- Professional equipment provided
- Available across Australia

Locations:
- Training centers nationwide
- All capital cities covered
- Regional training available
- Mobile training units for remote areas

Course Features:
- Hands-on training with professional equipment
- Experienced CASA-approved instructors
- Small class sizes for personalized attention
- Fast-track certification option
- Real-world scenario training

Post-Course Support:
- 3-month mentorship program
- Job placement assistance and graduate job board
- Equipment purchase discounts (10-15% off)
- Business setup guidance

Best For:
- Quick certification (1 week total)
- Immediate job seeking
- Time-constrained students

Website: https://gdronesolutions.com.au
Contact: Available nationwide - courses monthly in all regions";
